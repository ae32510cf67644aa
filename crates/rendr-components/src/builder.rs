//! Node factories.
//!
//! - [`html`]: tag-named element factories and the `text`/`attr`/`class`/`style`
//!   property constructors

pub mod html;
