//! In-memory document.
//!
//! A small element tree with the same observable behaviour the materializer relies
//! on in a browser: appending moves a node, text content and inner markup replace all
//! children, listeners are kept per event name and run synchronously on
//! [`MemoryNode::dispatch`].

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::Document;
use super::selector::Selector;
use crate::callback::{Event, Handler};
use crate::error::DomError;

#[derive(Clone)]
enum MemoryChild {
	Element(MemoryNode),
	Text(String),
	Markup(String),
}

struct MemoryElement {
	tag: String,
	attributes: Vec<(String, String)>,
	children: Vec<MemoryChild>,
	listeners: Vec<(String, Handler)>,
	parent: Weak<RefCell<MemoryElement>>,
}

/// Handle to an element of a [`MemoryDocument`]. Clones share the element.
#[derive(Clone)]
pub struct MemoryNode {
	inner: Rc<RefCell<MemoryElement>>,
}

fn is_valid_name(name: &str) -> bool {
	!name.is_empty()
		&& !name
			.chars()
			.any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '\'' | '/' | '='))
}

fn escape_text(s: &str, out: &mut String) {
	for c in s.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			_ => out.push(c),
		}
	}
}

fn escape_attribute(s: &str, out: &mut String) {
	for c in s.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'"' => out.push_str("&quot;"),
			_ => out.push(c),
		}
	}
}

impl MemoryNode {
	fn new(tag: &str) -> Self {
		Self {
			inner: Rc::new(RefCell::new(MemoryElement {
				tag: tag.to_ascii_lowercase(),
				attributes: Vec::new(),
				children: Vec::new(),
				listeners: Vec::new(),
				parent: Weak::new(),
			})),
		}
	}

	/// Returns `true` if both handles point at the same element.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	/// Returns the lowercase tag name.
	pub fn tag_name(&self) -> String {
		self.inner.borrow().tag.clone()
	}

	/// Returns the value of attribute `name`.
	pub fn attribute(&self, name: &str) -> Option<String> {
		self.inner
			.borrow()
			.attributes
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.clone())
	}

	/// Returns all attributes in the order they were first set.
	pub fn attributes(&self) -> Vec<(String, String)> {
		self.inner.borrow().attributes.clone()
	}

	/// Returns the element children.
	pub fn children(&self) -> Vec<MemoryNode> {
		self.inner
			.borrow()
			.children
			.iter()
			.filter_map(|child| match child {
				MemoryChild::Element(node) => Some(node.clone()),
				MemoryChild::Text(_) | MemoryChild::Markup(_) => None,
			})
			.collect()
	}

	/// Returns the number of child nodes, text included.
	pub fn child_count(&self) -> usize {
		self.inner.borrow().children.len()
	}

	/// Returns the parent element, if attached.
	pub fn parent(&self) -> Option<MemoryNode> {
		self.inner
			.borrow()
			.parent
			.upgrade()
			.map(|inner| MemoryNode { inner })
	}

	/// Returns the concatenated text of all descendants.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	fn collect_text(&self, out: &mut String) {
		for child in &self.inner.borrow().children {
			match child {
				MemoryChild::Element(node) => node.collect_text(out),
				MemoryChild::Text(text) | MemoryChild::Markup(text) => out.push_str(text),
			}
		}
	}

	/// Serializes the children.
	pub fn inner_html(&self) -> String {
		let mut out = String::new();
		self.write_children(&mut out);
		out
	}

	/// Serializes the element and its subtree.
	pub fn outer_html(&self) -> String {
		let mut out = String::new();
		self.write_outer(&mut out);
		out
	}

	fn write_outer(&self, out: &mut String) {
		let element = self.inner.borrow();
		out.push('<');
		out.push_str(&element.tag);
		for (name, value) in &element.attributes {
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			escape_attribute(value, out);
			out.push('"');
		}
		out.push('>');
		drop(element);
		self.write_children(out);
		out.push_str("</");
		out.push_str(&self.inner.borrow().tag);
		out.push('>');
	}

	fn write_children(&self, out: &mut String) {
		for child in &self.inner.borrow().children {
			match child {
				MemoryChild::Element(node) => node.write_outer(out),
				MemoryChild::Text(text) => escape_text(text, out),
				MemoryChild::Markup(markup) => out.push_str(markup),
			}
		}
	}

	/// Returns how many listeners are registered for `event`.
	pub fn listener_count(&self, event: &str) -> usize {
		self.inner
			.borrow()
			.listeners
			.iter()
			.filter(|(name, _)| name == event)
			.count()
	}

	/// Runs every listener registered for `event_type` in registration order and
	/// returns how many ran. Listeners may freely mutate the tree.
	pub fn dispatch(&self, event_type: &str, event: Event) -> usize {
		let handlers: Vec<Handler> = self
			.inner
			.borrow()
			.listeners
			.iter()
			.filter(|(name, _)| name == event_type)
			.map(|(_, handler)| handler.clone())
			.collect();
		for handler in &handlers {
			handler.call(event.clone());
		}
		handlers.len()
	}

	fn contains(&self, other: &MemoryNode) -> bool {
		let mut current = Some(other.clone());
		while let Some(node) = current {
			if node.ptr_eq(self) {
				return true;
			}
			current = node.parent();
		}
		false
	}

	fn detach(&self) {
		let parent = self.inner.borrow().parent.upgrade();
		if let Some(parent) = parent {
			parent.borrow_mut().children.retain(|child| match child {
				MemoryChild::Element(node) => !node.ptr_eq(self),
				MemoryChild::Text(_) | MemoryChild::Markup(_) => true,
			});
		}
		self.inner.borrow_mut().parent = Weak::new();
	}

	fn clear_children(&self) {
		let removed = std::mem::take(&mut self.inner.borrow_mut().children);
		for child in removed {
			if let MemoryChild::Element(node) = child {
				node.inner.borrow_mut().parent = Weak::new();
			}
		}
	}

	fn find(&self, selector: &Selector) -> Option<MemoryNode> {
		let matched = {
			let element = self.inner.borrow();
			let lookup = |name: &str| {
				element
					.attributes
					.iter()
					.find(|(key, _)| key == name)
					.map(|(_, value)| value.as_str())
			};
			selector.matches(&element.tag, lookup("id"), lookup("class"))
		};
		if matched {
			return Some(self.clone());
		}
		self.children()
			.into_iter()
			.find_map(|child| child.find(selector))
	}
}

impl fmt::Debug for MemoryNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("MemoryNode").field(&self.outer_html()).finish()
	}
}

/// An in-memory document rooted at a `<body>` element.
///
/// ## Example
///
/// ```ignore
/// let document = MemoryDocument::new();
/// let host = document.create_element("div")?;
/// document.set_attribute(&host, "id", "app")?;
/// document.append_child(document.body(), &host)?;
/// assert!(document.query_selector("#app")?.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct MemoryDocument {
	body: MemoryNode,
}

impl Default for MemoryDocument {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryDocument {
	/// Creates a document with an empty body.
	pub fn new() -> Self {
		Self {
			body: MemoryNode::new("body"),
		}
	}

	/// Returns the body element.
	pub fn body(&self) -> &MemoryNode {
		&self.body
	}
}

impl Document for MemoryDocument {
	type Node = MemoryNode;

	fn query_selector(&self, selector: &str) -> Result<Option<MemoryNode>, DomError> {
		let selector = Selector::parse(selector)?;
		Ok(self.body.find(&selector))
	}

	fn create_element(&self, tag: &str) -> Result<MemoryNode, DomError> {
		if !is_valid_name(tag) {
			return Err(DomError::Js(format!(
				"InvalidCharacterError: `{tag}` is not a valid tag name"
			)));
		}
		Ok(MemoryNode::new(tag))
	}

	fn set_attribute(&self, node: &MemoryNode, name: &str, value: &str) -> Result<(), DomError> {
		if !is_valid_name(name) {
			return Err(DomError::Js(format!(
				"InvalidCharacterError: `{name}` is not a valid attribute name"
			)));
		}
		let mut element = node.inner.borrow_mut();
		match element.attributes.iter_mut().find(|(key, _)| key == name) {
			Some((_, existing)) => *existing = value.to_string(),
			None => element
				.attributes
				.push((name.to_string(), value.to_string())),
		}
		Ok(())
	}

	fn set_text_content(&self, node: &MemoryNode, text: &str) {
		node.clear_children();
		if !text.is_empty() {
			node.inner
				.borrow_mut()
				.children
				.push(MemoryChild::Text(text.to_string()));
		}
	}

	fn set_inner_html(&self, node: &MemoryNode, html: &str) {
		node.clear_children();
		if !html.is_empty() {
			node.inner
				.borrow_mut()
				.children
				.push(MemoryChild::Markup(html.to_string()));
		}
	}

	fn append_child(&self, parent: &MemoryNode, child: &MemoryNode) -> Result<(), DomError> {
		if child.contains(parent) {
			return Err(DomError::Js(
				"HierarchyRequestError: the new child is an ancestor of the parent".to_string(),
			));
		}
		child.detach();
		child.inner.borrow_mut().parent = Rc::downgrade(&parent.inner);
		parent
			.inner
			.borrow_mut()
			.children
			.push(MemoryChild::Element(child.clone()));
		Ok(())
	}

	fn add_event_listener(
		&self,
		node: &MemoryNode,
		event: &str,
		handler: Handler,
	) -> Result<(), DomError> {
		node.inner
			.borrow_mut()
			.listeners
			.push((event.to_string(), handler));
		Ok(())
	}
}
