//! Renderer trait definition.

use super::node::Node;

/// Anything that can be normalized into a [`Node`] tree.
///
/// For [`Node`] itself this is the identity. User component types implement it to
/// compute a derived tree, which is then serialized or mounted like any other node.
///
/// # Example
///
/// ```ignore
/// use rendr_components::{Node, Renderer, li, text, ul};
///
/// struct TodoList {
///     items: Vec<String>,
/// }
///
/// impl Renderer for TodoList {
///     fn render(self) -> Node {
///         ul(self.items.into_iter().map(|item| li(text(item))).collect::<Vec<_>>())
///     }
/// }
/// ```
pub trait Renderer {
	/// Produces the canonical node for this value.
	fn render(self) -> Node;
}

impl Renderer for Node {
	fn render(self) -> Node {
		self
	}
}
