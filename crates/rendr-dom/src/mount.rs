//! Mount driver.
//!
//! Every call to [`Mounter::render`] looks up the target, materializes the tree,
//! clears the target and inserts the new element as its only child. Nothing is
//! diffed or reused between renders.

use std::cell::RefCell;
use std::collections::HashMap;

use rendr_components::{Document, Renderer, info_log, warn_log};

use crate::error::MountError;

/// Renders component trees into elements of a [`Document`].
///
/// The last element inserted under each selector is recorded and can be read back
/// with [`Mounter::mounted`].
///
/// # Example
///
/// ```ignore
/// use rendr_components::{Document, MemoryDocument, h1, text};
/// use rendr_dom::Mounter;
///
/// let document = MemoryDocument::new();
/// let host = document.create_element("div")?;
/// document.set_attribute(&host, "id", "app")?;
/// document.append_child(document.body(), &host)?;
///
/// let mounter = Mounter::new(document);
/// mounter.render("#app", h1(text("Hello")))?;
/// ```
pub struct Mounter<D: Document> {
	document: D,
	mounted: RefCell<HashMap<String, D::Node>>,
}

impl<D: Document> Mounter<D> {
	/// Creates a mounter over `document`.
	pub fn new(document: D) -> Self {
		Self {
			document,
			mounted: RefCell::new(HashMap::new()),
		}
	}

	/// Returns the underlying document.
	pub fn document(&self) -> &D {
		&self.document
	}

	/// Renders `root` and makes it the sole child of the first element matching
	/// `selector`.
	///
	/// The tree is materialized before the target is touched, so a failed render
	/// leaves the previous content in place.
	///
	/// # Errors
	///
	/// Returns [`MountError::ElementNotFound`] when nothing matches `selector`, and
	/// [`MountError::Dom`] when the selector is malformed or the document rejects a
	/// call while building the tree.
	pub fn render(&self, selector: &str, root: impl Renderer) -> Result<D::Node, MountError> {
		let Some(target) = self.document.query_selector(selector)? else {
			warn_log!("render: no element matches `{}`", selector);
			return Err(MountError::ElementNotFound(selector.to_string()));
		};

		let node = root.render().to_html(&self.document)?;

		self.document.set_inner_html(&target, "");
		self.document.append_child(&target, &node)?;

		let previous = self
			.mounted
			.borrow_mut()
			.insert(selector.to_string(), node.clone());
		match previous {
			Some(_) => info_log!("render: replaced tree under `{}`", selector),
			None => info_log!("render: mounted into `{}`", selector),
		}

		Ok(node)
	}

	/// Returns the element most recently inserted for `selector`.
	pub fn mounted(&self, selector: &str) -> Option<D::Node> {
		self.mounted.borrow().get(selector).cloned()
	}
}

impl<D: Document + std::fmt::Debug> std::fmt::Debug for Mounter<D> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut selectors: Vec<String> = self.mounted.borrow().keys().cloned().collect();
		selectors.sort();
		f.debug_struct("Mounter")
			.field("document", &self.document)
			.field("mounted", &selectors)
			.finish()
	}
}
