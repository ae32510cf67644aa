//! Conversion of child arguments into nodes.

use std::borrow::Cow;

use super::node::Node;

/// Types accepted wherever a node takes children.
///
/// Implemented for single nodes, strings (as text nodes), `Option` (where `None` is
/// skipped), `Vec`, arrays, `()` (no children) and tuples of up to eight mixed items,
/// so heterogeneous children can be passed in one call:
///
/// ```ignore
/// div((class("card"), attr("id", "a"), styles(theme), h1("Title")))
/// ```
pub trait IntoChildren {
	/// Appends the converted nodes to `out`, in order.
	fn push_into(self, out: &mut Vec<Node>);
}

impl IntoChildren for () {
	fn push_into(self, _out: &mut Vec<Node>) {}
}

impl IntoChildren for Node {
	fn push_into(self, out: &mut Vec<Node>) {
		out.push(self);
	}
}

impl IntoChildren for &'static str {
	fn push_into(self, out: &mut Vec<Node>) {
		out.push(Node::text(self));
	}
}

impl IntoChildren for String {
	fn push_into(self, out: &mut Vec<Node>) {
		out.push(Node::text(self));
	}
}

impl IntoChildren for Cow<'static, str> {
	fn push_into(self, out: &mut Vec<Node>) {
		out.push(Node::text(self));
	}
}

impl<T: IntoChildren> IntoChildren for Option<T> {
	fn push_into(self, out: &mut Vec<Node>) {
		if let Some(children) = self {
			children.push_into(out);
		}
	}
}

impl<T: IntoChildren> IntoChildren for Vec<T> {
	fn push_into(self, out: &mut Vec<Node>) {
		for child in self {
			child.push_into(out);
		}
	}
}

impl<T: IntoChildren, const N: usize> IntoChildren for [T; N] {
	fn push_into(self, out: &mut Vec<Node>) {
		for child in self {
			child.push_into(out);
		}
	}
}

macro_rules! impl_into_children_for_tuple {
	($($name:ident),+) => {
		impl<$($name: IntoChildren),+> IntoChildren for ($($name,)+) {
			#[allow(non_snake_case)]
			fn push_into(self, out: &mut Vec<Node>) {
				let ($($name,)+) = self;
				$($name.push_into(out);)+
			}
		}
	};
}

impl_into_children_for_tuple!(A);
impl_into_children_for_tuple!(A, B);
impl_into_children_for_tuple!(A, B, C);
impl_into_children_for_tuple!(A, B, C, D);
impl_into_children_for_tuple!(A, B, C, D, E);
impl_into_children_for_tuple!(A, B, C, D, E, F);
impl_into_children_for_tuple!(A, B, C, D, E, F, G);
impl_into_children_for_tuple!(A, B, C, D, E, F, G, H);
