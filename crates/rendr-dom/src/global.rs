//! Process-wide mounter for the browser document.
//!
//! The mounter is created on first use and kept in thread-local storage, so
//! handlers can call [`render`] again to redraw.

use std::cell::RefCell;
use std::rc::Rc;

use rendr_components::{Renderer, WebDocument};

use crate::error::MountError;
use crate::mount::Mounter;

thread_local! {
	static GLOBAL_MOUNTER: RefCell<Option<Rc<Mounter<WebDocument>>>> = const { RefCell::new(None) };
}

fn global_mounter() -> Result<Rc<Mounter<WebDocument>>, MountError> {
	GLOBAL_MOUNTER.with(|slot| {
		if let Some(mounter) = slot.borrow().as_ref() {
			return Ok(Rc::clone(mounter));
		}
		let mounter = Rc::new(Mounter::new(WebDocument::global()?));
		*slot.borrow_mut() = Some(Rc::clone(&mounter));
		Ok(mounter)
	})
}

/// Renders `root` into the first element of the page matching `selector`,
/// replacing whatever it contained.
///
/// # Errors
///
/// See [`Mounter::render`]. Also fails with [`MountError::Dom`] outside a browser
/// window.
///
/// # Example
///
/// ```ignore
/// use rendr_components::{h1, text};
///
/// rendr_dom::render("#app", h1(text("Hello")))?;
/// ```
pub fn render(selector: &str, root: impl Renderer) -> Result<web_sys::Element, MountError> {
	global_mounter()?.render(selector, root)
}

/// Returns the element most recently mounted under `selector` by [`render`].
pub fn mounted(selector: &str) -> Option<web_sys::Element> {
	GLOBAL_MOUNTER.with(|slot| {
		slot.borrow()
			.as_ref()
			.and_then(|mounter| mounter.mounted(selector))
	})
}
