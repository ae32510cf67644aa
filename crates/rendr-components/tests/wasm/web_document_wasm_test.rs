//! Browser tests for WebDocument
//!
//! Run with: wasm-pack test --chrome --headless crates/rendr-components

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use rendr_components::{
	Document, DomError, WebDocument, attr, button, class, div, li, style, text, ul,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> WebDocument {
	WebDocument::global().unwrap()
}

fn attach(document: &WebDocument, element: &web_sys::Element) {
	let body = document.inner().body().unwrap();
	body.append_child(element).unwrap();
}

#[wasm_bindgen_test]
fn test_create_element_and_attributes() {
	let document = document();
	let element = document.create_element("section").unwrap();
	document.set_attribute(&element, "id", "wasm-section").unwrap();

	assert_eq!(element.tag_name().to_lowercase(), "section");
	assert_eq!(element.get_attribute("id").as_deref(), Some("wasm-section"));
}

#[wasm_bindgen_test]
fn test_query_selector_finds_attached_element() {
	let document = document();
	let element = div(attr("id", "wasm-query")).to_html(&document).unwrap();
	attach(&document, &element);

	let found = document.query_selector("#wasm-query").unwrap().unwrap();
	assert!(found.is_same_node(Some(element.as_ref())));
	assert!(document.query_selector("#wasm-missing").unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_query_selector_rejects_malformed_selector() {
	let result = document().query_selector("##");
	assert!(matches!(result, Err(DomError::InvalidSelector(_))));
}

#[wasm_bindgen_test]
fn test_to_html_builds_live_tree() {
	let document = document();
	let element = ul((
		class("list"),
		style("margin", "0"),
		li(text("one")),
		li(text("two")),
	))
	.to_html(&document)
	.unwrap();

	assert_eq!(element.get_attribute("class").as_deref(), Some("list"));
	assert_eq!(element.get_attribute("style").as_deref(), Some("margin:0;"));
	assert_eq!(element.child_element_count(), 2);
	assert_eq!(element.text_content().as_deref(), Some("onetwo"));
}

#[wasm_bindgen_test]
fn test_click_reaches_handler() {
	let document = document();
	let clicks = Rc::new(Cell::new(0));
	let element = button(text("go"))
		.on("click", {
			let clicks = Rc::clone(&clicks);
			move |_| clicks.set(clicks.get() + 1)
		})
		.to_html(&document)
		.unwrap();
	attach(&document, &element);

	let html: web_sys::HtmlElement = element.dyn_into().unwrap();
	html.click();
	html.click();

	assert_eq!(clicks.get(), 2);
}
