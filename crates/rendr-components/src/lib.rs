//! rendr components - declarative component tree
//!
//! A tiny node model for describing browser UI. A [`Node`] carries a tag, a literal
//! body, ordered children and event handlers, and can be turned into either an HTML
//! string or a live document element.
//!
//! ## Architecture
//!
//! - [`component`]: the [`Node`] type, its [`Kind`] discriminant and the [`Renderer`] trait
//! - [`builder`]: tag-named factory functions (`div`, `span`, `h1`, ...) and property
//!   constructors (`attr`, `class`, `style`, `styles`)
//! - [`render`]: the two tree walks, HTML text and DOM materialization
//! - [`document`]: the [`Document`] abstraction with a browser ([`WebDocument`], wasm32 only)
//!   and an in-memory ([`MemoryDocument`]) implementation
//! - [`callback`]: event handler wrapper
//! - [`logging`]: console / `tracing` logging macros
//!
//! ## Example
//!
//! ```ignore
//! use rendr_components::{attr, class, div, h1, style, text};
//!
//! let card = div((
//!     class("card"),
//!     attr("id", "greeting"),
//!     style("color", "red"),
//!     h1(text("Hello")),
//! ))
//! .on("click", |_event| info_log!("clicked"));
//!
//! let html = card.to_text();
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod callback;
pub mod component;
pub mod document;
pub mod error;
pub mod logging;
pub mod options;
pub mod render;

pub use builder::html::{
	any, attr, button, class, div, h1, h2, h3, h4, h5, h6, img, li, p, section, small, span,
	strong, style, styles, text, ul,
};
pub use callback::{Event, Events, Handler};
#[cfg(not(target_arch = "wasm32"))]
pub use callback::DummyEvent;
pub use component::{IntoChildren, Kind, Node, Renderer};
pub use document::{Document, MemoryDocument, MemoryNode};
#[cfg(target_arch = "wasm32")]
pub use document::WebDocument;
pub use error::DomError;
pub use options::RenderOptions;

// Re-exported for the logging macros so downstream crates need no direct dependency.
#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
pub use tracing as __tracing;
#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub use web_sys as __web_sys;
