//! HTML node factories
//!
//! Every element factory is shorthand for [`any`] with a fixed tag, which in turn is
//! `Node::element(tag).append(children)`.
//!
//! ## Example
//!
//! ```ignore
//! let list = ul((
//!     class("todo"),
//!     li(text("Write the parser")),
//!     li((style("color", "gray"), text("Ship it"))),
//! ));
//! ```

use std::borrow::Cow;

use crate::component::{IntoChildren, Node};

/// Creates an element with an arbitrary tag and appends `children`.
pub fn any(tag: impl Into<Cow<'static, str>>, children: impl IntoChildren) -> Node {
	Node::element(tag).append(children)
}

/// Defines a tag-named element factory
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name(children: impl IntoChildren) -> Node {
			any($tag, children)
		}
	};
}

define_element!(
	/// Create an `<h1>` element
	h1, "h1"
);
define_element!(
	/// Create an `<h2>` element
	h2, "h2"
);
define_element!(
	/// Create an `<h3>` element
	h3, "h3"
);
define_element!(
	/// Create an `<h4>` element
	h4, "h4"
);
define_element!(
	/// Create an `<h5>` element
	h5, "h5"
);
define_element!(
	/// Create an `<h6>` element
	h6, "h6"
);

define_element!(
	/// Create a `<div>` element
	///
	/// ## Example
	///
	/// ```ignore
	/// let container = div((class("container"), p(text("Content"))));
	/// ```
	div, "div"
);

define_element!(
	/// Create a `<span>` element
	span, "span"
);

define_element!(
	/// Create a `<section>` element
	section, "section"
);

define_element!(
	/// Create a `<p>` element (paragraph)
	p, "p"
);

define_element!(
	/// Create a `<ul>` element (unordered list)
	ul, "ul"
);

define_element!(
	/// Create a `<li>` element (list item)
	li, "li"
);

define_element!(
	/// Create a `<button>` element
	///
	/// ## Example
	///
	/// ```ignore
	/// let save = button(text("Save")).on("click", |_event| info_log!("saved"));
	/// ```
	button, "button"
);

define_element!(
	/// Create an `<img>` element
	///
	/// Rendered with a closing tag like every other element.
	img, "img"
);

define_element!(
	/// Create a `<strong>` element
	strong, "strong"
);

define_element!(
	/// Create a `<small>` element
	small, "small"
);

/// Creates a body-only node, rendered as a `div` wrapping `body`.
pub fn text(body: impl Into<Cow<'static, str>>) -> Node {
	Node::text(body)
}

/// Creates an attribute for the parent element.
pub fn attr(key: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Node {
	Node::attribute(key, value)
}

/// Creates a class for the parent element.
pub fn class(name: impl Into<Cow<'static, str>>) -> Node {
	Node::class(name)
}

/// Creates an inline style property for the parent element.
pub fn style(property: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Node {
	Node::style(property, value)
}

/// Creates one style node per entry, in the iteration order of `entries`.
///
/// Nothing is sorted: a `HashMap` yields an unspecified order, while a `BTreeMap`, a
/// slice or a `Vec` of pairs yields a stable one.
///
/// ## Example
///
/// ```ignore
/// let theme = BTreeMap::from([("color", "red"), ("margin", "0")]);
/// let panel = div(styles(theme));
/// ```
pub fn styles<I, K, V>(entries: I) -> Vec<Node>
where
	I: IntoIterator<Item = (K, V)>,
	K: Into<Cow<'static, str>>,
	V: Into<Cow<'static, str>>,
{
	entries
		.into_iter()
		.map(|(property, value)| Node::style(property, value))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::Kind;
	use rstest::rstest;
	use std::collections::{BTreeMap, HashMap};

	#[rstest]
	#[case(h1(()), "h1")]
	#[case(h2(()), "h2")]
	#[case(h3(()), "h3")]
	#[case(h4(()), "h4")]
	#[case(h5(()), "h5")]
	#[case(h6(()), "h6")]
	#[case(div(()), "div")]
	#[case(span(()), "span")]
	#[case(section(()), "section")]
	#[case(p(()), "p")]
	#[case(ul(()), "ul")]
	#[case(li(()), "li")]
	#[case(button(()), "button")]
	#[case(img(()), "img")]
	#[case(strong(()), "strong")]
	#[case(small(()), "small")]
	fn test_element_factories(#[case] node: Node, #[case] tag: &str) {
		assert_eq!(node.kind(), Kind::Element);
		assert_eq!(node.key(), tag);
	}

	#[rstest]
	fn test_shortcut_equals_any() {
		let shortcut = span((attr("id", "x"), text("y")));
		let general = any("span", ()).append((attr("id", "x"), text("y")));
		assert_eq!(shortcut, general);
	}

	#[rstest]
	fn test_text_has_empty_tag() {
		let node = text("hello");
		assert_eq!(node.kind(), Kind::Text);
		assert_eq!(node.key(), "");
		assert_eq!(node.value(), "hello");
	}

	#[rstest]
	fn test_styles_follow_input_order() {
		let ordered = styles(BTreeMap::from([("width", "1px"), ("color", "red")]));
		let keys: Vec<_> = ordered.iter().map(Node::key).collect();
		assert_eq!(keys, ["color", "width"]);

		let listed = styles([("width", "1px"), ("color", "red")]);
		let keys: Vec<_> = listed.iter().map(Node::key).collect();
		assert_eq!(keys, ["width", "color"]);
	}

	#[rstest]
	fn test_styles_from_hash_map_contains_every_entry() {
		let map = HashMap::from([("a", "1"), ("b", "2"), ("c", "3")]);
		let nodes = styles(map);
		let mut pairs: Vec<(&str, &str)> = nodes.iter().map(|n| (n.key(), n.value())).collect();
		pairs.sort_unstable();
		assert_eq!(pairs, [("a", "1"), ("b", "2"), ("c", "3")]);
		assert!(styles(HashMap::<String, String>::new()).is_empty());
	}
}
