//! # rendr
//!
//! A minimal declarative UI component tree for the browser.
//!
//! Trees are built from tag-named factory calls, then either serialized to an HTML
//! string or materialized as live document elements and mounted under a
//! CSS-selected root. There is no diffing: every mount clears the target and
//! inserts the new tree.
//!
//! ## Crates
//!
//! - [`components`]: node model, factories, HTML text output and DOM materialization
//! - [`dom`]: the mount driver
//!
//! ## Feature Flags
//!
//! - `console_error_panic_hook` - route panics to the browser console (wasm32 only)
//! - `debug-hooks` - debug-level logging from the render passes
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use rendr::prelude::*;
//!
//! struct Greeting {
//!     name: String,
//! }
//!
//! impl Renderer for Greeting {
//!     fn render(self) -> Node {
//!         div((
//!             class("greeting"),
//!             style("color", "teal"),
//!             h1(text(format!("Hello, {}!", self.name))),
//!         ))
//!     }
//! }
//!
//! // HTML string
//! let html = Greeting { name: "world".into() }.render().to_text();
//!
//! // Browser
//! install_panic_hook();
//! render("#app", Greeting { name: "world".into() })?;
//! ```

pub mod components;
pub mod dom;

pub use rendr_components::{
	Document, DomError, Event, Handler, IntoChildren, Kind, MemoryDocument, MemoryNode, Node,
	RenderOptions, Renderer,
};
#[cfg(target_arch = "wasm32")]
pub use rendr_components::WebDocument;
pub use rendr_dom::{MountError, Mounter, install_panic_hook};
#[cfg(target_arch = "wasm32")]
pub use rendr_dom::{mounted, render};

// Logging macros
pub use rendr_components::{debug_log, error_log, info_log, warn_log};

pub mod prelude {
	pub use crate::{
		Document, DomError, Event, IntoChildren, MountError, Mounter, Node, RenderOptions,
		Renderer, install_panic_hook,
	};

	// Factories
	pub use rendr_components::{
		any, attr, button, class, div, h1, h2, h3, h4, h5, h6, img, li, p, section, small, span,
		strong, style, styles, text, ul,
	};

	// Browser mounting
	#[cfg(target_arch = "wasm32")]
	pub use crate::{WebDocument, mounted, render};
}
