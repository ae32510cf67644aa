//! Tree walks
//!
//! - [`text`]: `Node::to_text` / `Node::to_text_with`, HTML string output
//! - [`html`]: `Node::to_html`, materialization against a [`Document`](crate::Document)
//!
//! Both walks share the same branching. A node with a non-empty body never looks at its
//! children. Otherwise each child is consumed according to its [`Kind`](crate::Kind):
//! element and text children become nested markup, attribute/class/style children
//! decorate the parent.

pub mod html;
pub mod text;

/// Appends the `property:value;` fragment of a style node.
pub(crate) fn push_style(out: &mut String, property: &str, value: &str) {
	out.push_str(property);
	out.push(':');
	out.push_str(value);
	out.push(';');
}
