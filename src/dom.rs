//! Mount driver
//!
//! This module provides access to rendr-dom, which replaces the contents of a
//! selected element with a freshly rendered tree.
//!
//! ## Example
//!
//! ```rust,ignore
//! use rendr::components::{Document, MemoryDocument, p, text};
//! use rendr::dom::Mounter;
//!
//! let document = MemoryDocument::new();
//! let host = document.create_element("main")?;
//! document.append_child(document.body(), &host)?;
//!
//! let mounter = Mounter::new(document);
//! mounter.render("main", p(text("ready")))?;
//! ```

// Re-export all rendr-dom functionality
pub use rendr_dom::*;
