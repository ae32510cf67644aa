//! rendr DOM - mount driver
//!
//! Puts rendered component trees into a document. A [`Mounter`] looks up a target
//! element by CSS selector, clears it and inserts the freshly materialized tree as its
//! only child, recording the last inserted element per selector.
//!
//! On `wasm32` the free functions [`render`] and [`mounted`] drive a global mounter
//! over the browser document.
//!
//! ## Example
//!
//! ```ignore
//! use rendr_components::{button, div, h1, text};
//!
//! fn app() -> rendr_components::Node {
//!     div((
//!         h1(text("Counter")),
//!         button(text("+1")).on("click", |_| {
//!             let _ = rendr_dom::render("#app", app());
//!         }),
//!     ))
//! }
//!
//! rendr_dom::install_panic_hook();
//! rendr_dom::render("#app", app())?;
//! ```

#![warn(missing_docs)]

pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod global;
pub mod mount;

pub use error::MountError;
#[cfg(target_arch = "wasm32")]
pub use global::{mounted, render};
pub use mount::Mounter;

/// Routes Rust panics to the browser console.
///
/// Does nothing unless the `console_error_panic_hook` feature is enabled and the
/// target is `wasm32`. Safe to call more than once.
pub fn install_panic_hook() {
	#[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))]
	console_error_panic_hook::set_once();
}
