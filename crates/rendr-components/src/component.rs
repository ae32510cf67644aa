//! Component tree model
//!
//! Every piece of a tree is a [`Node`]. Its [`Kind`] decides how a parent consumes it
//! during rendering:
//!
//! | Kind | `tag` holds | `body` holds | Contributes to parent |
//! |------|-------------|--------------|-----------------------|
//! | `Element` | tag name | text body | child markup / child element |
//! | `Text` | (empty, renders as `div`) | literal text | child markup / child element |
//! | `Attribute` | attribute name | attribute value | attribute |
//! | `Class` | (unused) | class name | class list |
//! | `Style` | property name | property value | `style` attribute |
//!
//! ## Usage
//!
//! ```ignore
//! use rendr_components::component::{Node, Renderer};
//!
//! struct Greeting {
//!     name: String,
//! }
//!
//! impl Renderer for Greeting {
//!     fn render(self) -> Node {
//!         Node::element("p").append(Node::text(format!("Hello, {}!", self.name)))
//!     }
//! }
//! ```

mod children;
mod node;
mod renderer;

pub use children::IntoChildren;
pub use node::{Kind, Node};
pub use renderer::Renderer;
