//! Facade integration tests
//!
//! Success Criteria:
//! 1. The prelude alone is enough to build, serialize and mount a tree
//! 2. The `components` and `dom` modules expose the member crates unchanged

#![cfg(not(target_arch = "wasm32"))]

use rendr::prelude::*;
use rstest::*;

struct Card {
	title: &'static str,
	highlighted: bool,
}

impl Renderer for Card {
	fn render(self) -> Node {
		section((
			self.highlighted.then(|| class("highlight")),
			h2(text(self.title)),
			p(text("body")),
		))
	}
}

#[rstest]
#[case(false, "<section  style=\"\">")]
#[case(true, "<section class=\"highlight\" style=\"\">")]
fn test_prelude_text_output(#[case] highlighted: bool, #[case] prefix: &str) {
	let options = RenderOptions::new().merge_classes(true);
	let html = Card {
		title: "News",
		highlighted,
	}
	.render()
	.to_text_with(&options);

	assert!(html.starts_with(prefix), "{html}");
	assert!(html.ends_with("<p  style=\"\"><div  style=\"\">body</div></p></section>"));
}

#[rstest]
fn test_prelude_mount() {
	let document = rendr::MemoryDocument::new();
	let host = document.create_element("main").unwrap();
	document.append_child(document.body(), &host).unwrap();
	let mounter = Mounter::new(document);

	let node = mounter
		.render(
			"main",
			Card {
				title: "News",
				highlighted: true,
			},
		)
		.unwrap();

	assert_eq!(node.attribute("class").as_deref(), Some("highlight"));
	assert_eq!(host.child_count(), 1);
	assert!(mounter.mounted("main").unwrap().ptr_eq(&node));
}

#[rstest]
fn test_module_reexports() {
	let node = rendr::components::div(rendr::components::text("x"));
	assert_eq!(node.kind(), rendr::components::Kind::Element);

	let error = rendr::dom::MountError::ElementNotFound("#app".to_string());
	assert_eq!(error.to_string(), "no element matches selector `#app`");
}
