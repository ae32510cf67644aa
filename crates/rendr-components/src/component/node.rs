//! The node type and its kind discriminant.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::children::IntoChildren;
use crate::callback::{Event, Events, Handler};

/// Tag used when a node has none.
pub(crate) const DEFAULT_TAG: &str = "div";

/// Role of a node inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
	/// A regular element.
	Element,
	/// A body-only node produced by [`text`](crate::builder::html::text).
	Text,
	/// An attribute of the parent (`tag` = name, `body` = value).
	Attribute,
	/// A class of the parent (`body` = class name).
	Class,
	/// An inline style property of the parent (`tag` = property, `body` = value).
	Style,
}

impl Kind {
	/// Returns `true` for kinds that render as elements of their own.
	pub fn is_element(self) -> bool {
		matches!(self, Kind::Element | Kind::Text)
	}

	/// Returns the lowercase name of the kind.
	pub fn as_str(self) -> &'static str {
		match self {
			Kind::Element => "element",
			Kind::Text => "text",
			Kind::Attribute => "attribute",
			Kind::Class => "class",
			Kind::Style => "style",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A node of the component tree.
///
/// Nodes are built by the factory functions in [`builder::html`](crate::builder::html)
/// and extended with [`append`](Self::append) and [`on`](Self::on), both of which
/// consume the node and hand it back.
#[derive(Clone)]
pub struct Node {
	kind: Kind,
	tag: Cow<'static, str>,
	body: Cow<'static, str>,
	children: Vec<Node>,
	events: Events,
}

impl Node {
	fn new(kind: Kind, tag: Cow<'static, str>, body: Cow<'static, str>) -> Self {
		Self {
			kind,
			tag,
			body,
			children: Vec::new(),
			events: Events::new(),
		}
	}

	/// Creates an element node with the given tag and no children.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> Self {
		Self::new(Kind::Element, tag.into(), Cow::Borrowed(""))
	}

	/// Creates a body-only node. Its tag is empty, so it renders as a `div`.
	pub fn text(body: impl Into<Cow<'static, str>>) -> Self {
		Self::new(Kind::Text, Cow::Borrowed(""), body.into())
	}

	/// Creates an attribute node.
	pub fn attribute(
		key: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		Self::new(Kind::Attribute, key.into(), value.into())
	}

	/// Creates a class node.
	pub fn class(name: impl Into<Cow<'static, str>>) -> Self {
		Self::new(Kind::Class, Cow::Borrowed(""), name.into())
	}

	/// Creates an inline style node.
	pub fn style(
		property: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		Self::new(Kind::Style, property.into(), value.into())
	}

	/// Returns the node kind.
	pub fn kind(&self) -> Kind {
		self.kind
	}

	/// Returns the identity key: the tag, attribute name or style property.
	pub fn key(&self) -> &str {
		&self.tag
	}

	/// Returns the identity value: the body, attribute value, class name or style value.
	pub fn value(&self) -> &str {
		&self.body
	}

	/// Returns the tag used for rendering, `div` when the node has none.
	pub fn resolved_tag(&self) -> &str {
		if self.tag.is_empty() {
			DEFAULT_TAG
		} else {
			&self.tag
		}
	}

	/// Returns the child nodes.
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Returns the registered event handlers.
	pub fn events(&self) -> &Events {
		&self.events
	}

	/// Returns the handler registered for `event`, if any.
	pub fn handler(&self, event: &str) -> Option<&Handler> {
		self.events.get(event)
	}

	/// Appends children after the existing ones, in order.
	///
	/// `None` children are skipped; nothing is de-duplicated.
	pub fn append(mut self, children: impl IntoChildren) -> Self {
		children.push_into(&mut self.children);
		self
	}

	/// Registers a handler for `event`, replacing any previous one for the same name.
	///
	/// ## Example
	///
	/// ```ignore
	/// button("Save").on("click", |_event| info_log!("saved"))
	/// ```
	pub fn on<F>(mut self, event: impl Into<Cow<'static, str>>, handler: F) -> Self
	where
		F: Fn(Event) + 'static,
	{
		self.events.insert(event.into(), Handler::new(handler));
		self
	}

	/// Same as [`on`](Self::on) for an already wrapped handler.
	pub fn on_handler(mut self, event: impl Into<Cow<'static, str>>, handler: Handler) -> Self {
		self.events.insert(event.into(), handler);
		self
	}
}

impl fmt::Debug for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut events: Vec<&str> = self.events.keys().map(|k| &**k).collect();
		events.sort_unstable();
		f.debug_struct("Node")
			.field("kind", &self.kind)
			.field("tag", &self.tag)
			.field("body", &self.body)
			.field("children", &self.children)
			.field("events", &events)
			.finish()
	}
}

/// Structural equality. Handlers compare by identity.
impl PartialEq for Node {
	fn eq(&self, other: &Self) -> bool {
		self.kind == other.kind
			&& self.tag == other.tag
			&& self.body == other.body
			&& self.children == other.children
			&& self.events.len() == other.events.len()
			&& self.events.iter().all(|(name, handler)| {
				other
					.events
					.get(name)
					.is_some_and(|theirs| handler.ptr_eq(theirs))
			})
	}
}
