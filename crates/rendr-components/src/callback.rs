//! Event handler types.
//!
//! A [`Handler`] is a cheaply cloneable, reference-counted closure receiving the
//! host's [`Event`]. Inside a browser this is `web_sys::Event`; on native targets a
//! [`DummyEvent`] stands in so trees with handlers can still be built, serialized and
//! dispatched against a [`MemoryDocument`](crate::document::MemoryDocument).

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// The event type handed to handlers.
#[cfg(target_arch = "wasm32")]
pub type Event = web_sys::Event;

/// The event type handed to handlers.
#[cfg(not(target_arch = "wasm32"))]
pub type Event = DummyEvent;

/// Event placeholder for native targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DummyEvent {
	event_type: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl DummyEvent {
	/// Creates an event of the given type (e.g. `"click"`).
	pub fn new(event_type: impl Into<String>) -> Self {
		Self {
			event_type: event_type.into(),
		}
	}

	/// Returns the event type.
	pub fn event_type(&self) -> &str {
		&self.event_type
	}
}

/// Event name to handler mapping. Registering a name twice keeps the last handler.
pub type Events = HashMap<Cow<'static, str>, Handler>;

/// A registered event handler.
#[derive(Clone)]
pub struct Handler {
	inner: Rc<dyn Fn(Event) + 'static>,
}

impl Handler {
	/// Wraps a closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Event) + 'static,
	{
		Self { inner: Rc::new(f) }
	}

	/// Invokes the handler.
	pub fn call(&self, event: Event) {
		(self.inner)(event)
	}

	/// Returns `true` if both handlers wrap the same closure.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}
}

impl fmt::Debug for Handler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Handler")
			.field("strong_count", &Rc::strong_count(&self.inner))
			.finish()
	}
}
