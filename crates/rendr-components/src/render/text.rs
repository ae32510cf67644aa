//! HTML string output.
//!
//! The output shape is fixed: `<TAG ATTRS style="STYLE">BODY</TAG>`. The `style`
//! attribute is always present (possibly empty), attribute fragments are concatenated
//! without separators and, by default, nothing is escaped and class children are
//! dropped. [`RenderOptions`] can switch on class merging and escaping.

use std::borrow::Cow;

use super::push_style;
use crate::component::{Kind, Node};
use crate::debug_log;
use crate::options::RenderOptions;

/// Escapes HTML special characters.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

fn maybe_escape<'a>(s: &'a str, options: &RenderOptions) -> Cow<'a, str> {
	if options.escape_html {
		html_escape(s)
	} else {
		Cow::Borrowed(s)
	}
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
	out.push_str(name);
	out.push_str("=\"");
	out.push_str(value);
	out.push('"');
}

impl Node {
	/// Renders the node to an HTML string with default [`RenderOptions`].
	///
	/// ## Example
	///
	/// ```ignore
	/// let html = div((attr("id", "a"), style("color", "red"), text("hi"))).to_text();
	/// assert_eq!(
	///     html,
	///     r#"<div id="a" style="color:red;"><div  style="">hi</div></div>"#
	/// );
	/// ```
	pub fn to_text(&self) -> String {
		self.to_text_with(&RenderOptions::default())
	}

	/// Renders the node to an HTML string.
	///
	/// Attribute, class and style nodes render as their bare fragment
	/// (`key="value"`, the class name, `key:value;`).
	pub fn to_text_with(&self, options: &RenderOptions) -> String {
		let mut out = String::new();
		self.write_text(options, &mut out);
		out
	}

	fn write_text(&self, options: &RenderOptions, out: &mut String) {
		match self.kind() {
			Kind::Element | Kind::Text => self.write_element_text(options, out),
			Kind::Attribute => push_attribute(
				out,
				self.key(),
				&maybe_escape(self.value(), options),
			),
			Kind::Class => out.push_str(&maybe_escape(self.value(), options)),
			Kind::Style => push_style(out, self.key(), &maybe_escape(self.value(), options)),
		}
	}

	fn write_element_text(&self, options: &RenderOptions, out: &mut String) {
		let tag = self.resolved_tag();
		let mut attrs = String::new();
		let mut style = String::new();
		let mut body = String::new();
		let mut classes: Vec<&str> = Vec::new();

		if !self.value().is_empty() {
			body.push_str(&maybe_escape(self.value(), options));
		} else {
			for child in self.children() {
				match child.kind() {
					Kind::Element | Kind::Text => child.write_text(options, &mut body),
					Kind::Attribute => push_attribute(
						&mut attrs,
						child.key(),
						&maybe_escape(child.value(), options),
					),
					Kind::Style => {
						push_style(&mut style, child.key(), &maybe_escape(child.value(), options))
					}
					Kind::Class if options.merge_classes => classes.push(child.value()),
					Kind::Class => {
						debug_log!("<{}>: class `{}` dropped from text output", tag, child.value());
					}
				}
			}
		}

		if !classes.is_empty() {
			push_attribute(&mut attrs, "class", &maybe_escape(&classes.join(" "), options));
		}

		out.push('<');
		out.push_str(tag);
		out.push(' ');
		out.push_str(&attrs);
		out.push_str(" style=\"");
		out.push_str(&style);
		out.push_str("\">");
		out.push_str(&body);
		out.push_str("</");
		out.push_str(tag);
		out.push('>');
	}
}
