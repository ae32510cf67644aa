//! Options for HTML text output.

use serde::{Deserialize, Serialize};

/// Options for [`Node::to_text_with`](crate::component::Node::to_text_with).
///
/// The defaults reproduce the legacy markup byte for byte: class children are dropped
/// and nothing is escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Merge class children into a `class="..."` attribute fragment.
	pub merge_classes: bool,
	/// HTML-escape bodies and attribute/style values.
	pub escape_html: bool,
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets whether class children are merged into the attribute slot.
	pub fn merge_classes(mut self, merge: bool) -> Self {
		self.merge_classes = merge;
		self
	}

	/// Sets whether text and values are HTML-escaped.
	pub fn escape_html(mut self, escape: bool) -> Self {
		self.escape_html = escape;
		self
	}
}
