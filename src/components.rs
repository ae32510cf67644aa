//! Declarative component tree
//!
//! This module provides access to rendr-components: the [`Node`](crate::Node) model,
//! tag-named factories, HTML text output and DOM materialization against any
//! [`Document`](crate::Document).
//!
//! ## Example
//!
//! ```rust,ignore
//! use rendr::components::{attr, div, style, text};
//!
//! let html = div((attr("id", "a"), style("color", "red"), text("hi"))).to_text();
//! assert_eq!(
//!     html,
//!     r#"<div id="a" style="color:red;"><div  style="">hi</div></div>"#
//! );
//! ```

// Re-export all rendr-components functionality
pub use rendr_components::*;
