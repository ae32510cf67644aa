//! Browser tests for the global mounter
//!
//! Run with: wasm-pack test --chrome --headless crates/rendr-dom

#![cfg(target_arch = "wasm32")]

use rendr_components::{h1, p, text};
use rendr_dom::{MountError, mounted, render};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn host(id: &str) -> web_sys::Element {
	let document = web_sys::window().unwrap().document().unwrap();
	let element = document.create_element("div").unwrap();
	element.set_id(id);
	document.body().unwrap().append_child(&element).unwrap();
	element
}

#[wasm_bindgen_test]
fn test_render_replaces_children() {
	let target = host("global-app");
	target.set_inner_html("<span>loading</span>");

	render("#global-app", h1(text("first"))).unwrap();
	let second = render("#global-app", p(text("second"))).unwrap();

	assert_eq!(target.child_element_count(), 1);
	assert_eq!(target.text_content().as_deref(), Some("second"));
	assert!(mounted("#global-app").unwrap().is_same_node(Some(second.as_ref())));
}

#[wasm_bindgen_test]
fn test_render_missing_target() {
	let result = render("#global-missing", h1(text("x")));
	assert_eq!(
		result.unwrap_err(),
		MountError::ElementNotFound("#global-missing".to_string())
	);
	assert!(mounted("#global-missing").is_none());
}
