//! Document abstraction layer
//!
//! [`Document`] is the set of host calls the materializer and the mount driver make.
//! Two implementations ship with the crate:
//!
//! - [`WebDocument`] (wasm32 only): the browser's `window.document` through `web-sys`
//! - [`MemoryDocument`]: an in-memory element tree for native targets and tests

mod memory;
mod selector;
#[cfg(target_arch = "wasm32")]
mod web;

pub use memory::{MemoryDocument, MemoryNode};
pub use selector::Selector;
#[cfg(target_arch = "wasm32")]
pub use web::WebDocument;

use crate::callback::Handler;
use crate::error::DomError;

/// Host document operations.
pub trait Document {
	/// Element handle type.
	type Node: Clone;

	/// Returns the first element matching `selector`, in document order.
	fn query_selector(&self, selector: &str) -> Result<Option<Self::Node>, DomError>;

	/// Creates a detached element.
	fn create_element(&self, tag: &str) -> Result<Self::Node, DomError>;

	/// Sets (or replaces) an attribute.
	fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), DomError>;

	/// Replaces all children of `node` with a single text node.
	fn set_text_content(&self, node: &Self::Node, text: &str);

	/// Replaces the inner markup of `node`. An empty string removes every child.
	fn set_inner_html(&self, node: &Self::Node, html: &str);

	/// Appends `child` as the last child of `parent`.
	fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;

	/// Registers a non-capturing listener for `event`.
	fn add_event_listener(
		&self,
		node: &Self::Node,
		event: &str,
		handler: Handler,
	) -> Result<(), DomError>;
}
