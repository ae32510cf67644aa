//! Browser document through `web-sys`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::Document;
use crate::callback::Handler;
use crate::error::DomError;

/// The browser's `window.document`.
///
/// Listeners are never removed: each registered handler keeps its JavaScript closure
/// alive for the rest of the page's lifetime, even after the element is replaced. A
/// handler that re-renders on every event therefore grows memory with each render.
#[derive(Debug, Clone)]
pub struct WebDocument {
	document: web_sys::Document,
}

impl WebDocument {
	/// Returns the document of the global `window`.
	///
	/// # Errors
	///
	/// Returns [`DomError::NoWindow`] or [`DomError::NoDocument`] outside a browser
	/// context.
	pub fn global() -> Result<Self, DomError> {
		let window = web_sys::window().ok_or(DomError::NoWindow)?;
		let document = window.document().ok_or(DomError::NoDocument)?;
		Ok(Self { document })
	}

	/// Wraps an existing document.
	pub fn from_document(document: web_sys::Document) -> Self {
		Self { document }
	}

	/// Returns the underlying `web_sys::Document`.
	pub fn inner(&self) -> &web_sys::Document {
		&self.document
	}
}

impl Document for WebDocument {
	type Node = web_sys::Element;

	fn query_selector(&self, selector: &str) -> Result<Option<web_sys::Element>, DomError> {
		self.document
			.query_selector(selector)
			.map_err(|_| DomError::InvalidSelector(selector.to_string()))
	}

	fn create_element(&self, tag: &str) -> Result<web_sys::Element, DomError> {
		Ok(self.document.create_element(tag)?)
	}

	fn set_attribute(
		&self,
		node: &web_sys::Element,
		name: &str,
		value: &str,
	) -> Result<(), DomError> {
		Ok(node.set_attribute(name, value)?)
	}

	fn set_text_content(&self, node: &web_sys::Element, text: &str) {
		node.set_text_content(Some(text));
	}

	fn set_inner_html(&self, node: &web_sys::Element, html: &str) {
		node.set_inner_html(html);
	}

	fn append_child(
		&self,
		parent: &web_sys::Element,
		child: &web_sys::Element,
	) -> Result<(), DomError> {
		parent.append_child(child)?;
		Ok(())
	}

	fn add_event_listener(
		&self,
		node: &web_sys::Element,
		event: &str,
		handler: Handler,
	) -> Result<(), DomError> {
		let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
			handler.call(event)
		});
		node.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
		// The listener lives as long as the element; nothing removes it.
		closure.forget();
		Ok(())
	}
}
