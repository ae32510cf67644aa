//! DOM materialization.

use super::push_style;
use crate::component::{Kind, Node};
use crate::debug_log;
use crate::document::Document;
use crate::error::DomError;

impl Node {
	/// Builds a live element for this node in `document`.
	///
	/// A node with a body gets it as text content. Otherwise attribute children are
	/// set as they are met, element and text children are materialized and appended,
	/// and class and style children are collected into `class` and `style`
	/// attributes set after the pass (each only when non-empty). Class names are joined
	/// with single spaces and no leading space, so `class("a")` then `class("b")` yields
	/// `class="a b"`. Event handlers are attached last.
	///
	/// # Errors
	///
	/// Returns [`DomError::UnsupportedKind`] when called on an attribute, class or
	/// style node, and propagates any failure reported by `document`.
	pub fn to_html<D: Document>(&self, document: &D) -> Result<D::Node, DomError> {
		if !self.kind().is_element() {
			return Err(DomError::UnsupportedKind(self.kind()));
		}

		let element = document.create_element(self.resolved_tag())?;

		if !self.value().is_empty() {
			document.set_text_content(&element, self.value());
		} else {
			let mut styles = String::new();
			let mut classes: Vec<&str> = Vec::new();
			for child in self.children() {
				match child.kind() {
					Kind::Class => classes.push(child.value()),
					Kind::Attribute => {
						document.set_attribute(&element, child.key(), child.value())?
					}
					Kind::Style => push_style(&mut styles, child.key(), child.value()),
					Kind::Element | Kind::Text => {
						let rendered = child.to_html(document)?;
						document.append_child(&element, &rendered)?;
					}
				}
			}
			if !styles.is_empty() {
				document.set_attribute(&element, "style", &styles)?;
			}
			if !classes.is_empty() {
				document.set_attribute(&element, "class", &classes.join(" "))?;
			}
		}

		for (event, handler) in self.events() {
			document.add_event_listener(&element, event, handler.clone())?;
		}
		if !self.events().is_empty() {
			debug_log!(
				"<{}>: attached {} event listener(s)",
				self.resolved_tag(),
				self.events().len()
			);
		}

		Ok(element)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::builder::html::{attr, button, class, div, img, li, style, text, ul};
	use crate::callback::DummyEvent;
	use crate::document::MemoryDocument;
	use rstest::{fixture, rstest};
	use std::cell::RefCell;
	use std::rc::Rc;

	#[fixture]
	fn document() -> MemoryDocument {
		MemoryDocument::new()
	}

	#[rstest]
	fn test_text_node_becomes_div_with_text(document: MemoryDocument) {
		let element = text("hi").to_html(&document).unwrap();
		assert_eq!(element.outer_html(), "<div>hi</div>");
	}

	#[rstest]
	fn test_body_short_circuits_children(document: MemoryDocument) {
		let node = text("x").append((div(()), attr("id", "a"), class("c")));
		let element = node.to_html(&document).unwrap();
		assert_eq!(element.outer_html(), "<div>x</div>");
	}

	#[rstest]
	fn test_attributes_classes_and_styles(document: MemoryDocument) {
		let node = div((
			class("card"),
			attr("id", "main"),
			style("color", "red"),
			class("big"),
			style("width", "1px"),
		));
		let element = node.to_html(&document).unwrap();

		assert_eq!(element.attribute("id").as_deref(), Some("main"));
		assert_eq!(element.attribute("class").as_deref(), Some("card big"));
		assert_eq!(
			element.attribute("style").as_deref(),
			Some("color:red;width:1px;")
		);
		assert_eq!(
			element.outer_html(),
			"<div id=\"main\" style=\"color:red;width:1px;\" class=\"card big\"></div>"
		);
	}

	#[rstest]
	#[case(div(class("only")), "only")]
	#[case(div((class("a"), class("b"), class("c"))), "a b c")]
	fn test_class_list_has_no_leading_space(
		document: MemoryDocument,
		#[case] node: Node,
		#[case] expected: &str,
	) {
		let element = node.to_html(&document).unwrap();
		assert_eq!(element.attribute("class").as_deref(), Some(expected));
	}

	#[rstest]
	fn test_style_and_class_omitted_when_empty(document: MemoryDocument) {
		let element = img(attr("src", "/a.png")).to_html(&document).unwrap();
		assert!(element.attribute("style").is_none());
		assert!(element.attribute("class").is_none());
		assert_eq!(element.outer_html(), "<img src=\"/a.png\"></img>");
	}

	#[rstest]
	fn test_accumulated_class_overrides_class_attribute(document: MemoryDocument) {
		let element = div((attr("class", "a"), class("b")))
			.to_html(&document)
			.unwrap();
		assert_eq!(element.attribute("class").as_deref(), Some("b"));
	}

	#[rstest]
	fn test_children_materialize_in_order(document: MemoryDocument) {
		let element = ul((li(text("one")), li(text("two"))))
			.to_html(&document)
			.unwrap();

		let items = element.children();
		assert_eq!(items.len(), 2);
		assert_eq!(items[0].text_content(), "one");
		assert_eq!(items[1].text_content(), "two");
		assert_eq!(
			element.outer_html(),
			"<ul><li><div>one</div></li><li><div>two</div></li></ul>"
		);
	}

	#[rstest]
	fn test_last_registered_handler_wins(document: MemoryDocument) {
		let log = Rc::new(RefCell::new(Vec::new()));
		let node = button(text("go"))
			.on("click", {
				let log = Rc::clone(&log);
				move |_| log.borrow_mut().push("h1")
			})
			.on("click", {
				let log = Rc::clone(&log);
				move |_| log.borrow_mut().push("h2")
			});

		let element = node.to_html(&document).unwrap();

		assert_eq!(element.listener_count("click"), 1);
		element.dispatch("click", DummyEvent::new("click"));
		assert_eq!(*log.borrow(), ["h2"]);
	}

	#[rstest]
	fn test_handlers_attached_on_text_nodes(document: MemoryDocument) {
		let element = text("x")
			.on("mouseenter", |_| {})
			.to_html(&document)
			.unwrap();
		assert_eq!(element.listener_count("mouseenter"), 1);
	}

	#[rstest]
	fn test_nested_handlers_attach_to_their_own_element(document: MemoryDocument) {
		let element = div(button(()).on("click", |_| {}))
			.to_html(&document)
			.unwrap();
		assert_eq!(element.listener_count("click"), 0);
		assert_eq!(element.children()[0].listener_count("click"), 1);
	}

	#[rstest]
	#[case(attr("id", "a"), Kind::Attribute)]
	#[case(class("c"), Kind::Class)]
	#[case(style("color", "red"), Kind::Style)]
	fn test_property_nodes_cannot_materialize(
		document: MemoryDocument,
		#[case] node: Node,
		#[case] kind: Kind,
	) {
		assert!(matches!(
			node.to_html(&document),
			Err(DomError::UnsupportedKind(k)) if k == kind
		));
	}

	#[rstest]
	fn test_document_errors_propagate(document: MemoryDocument) {
		let result = div(attr("bad name", "x")).to_html(&document);
		assert!(matches!(result, Err(DomError::Js(_))));
	}
}
