//! Errors raised while talking to a document.

use thiserror::Error;

use crate::component::Kind;

/// Failure reported by a [`Document`](crate::document::Document) implementation or by
/// DOM materialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// Window object not available.
	#[error("window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("document object not available")]
	NoDocument,
	/// The selector could not be parsed.
	#[error("unsupported selector `{0}`")]
	InvalidSelector(String),
	/// Attribute, class and style nodes only exist inside an element.
	#[error("{0} nodes cannot be materialized on their own")]
	UnsupportedKind(Kind),
	/// A JavaScript exception thrown by the browser.
	#[error("JavaScript error: {0}")]
	Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		value
			.as_string()
			.map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(DomError::NoWindow, "window object not available")]
	#[case(DomError::NoDocument, "document object not available")]
	#[case(DomError::InvalidSelector("div > p".into()), "unsupported selector `div > p`")]
	#[case(
		DomError::UnsupportedKind(Kind::Style),
		"style nodes cannot be materialized on their own"
	)]
	#[case(DomError::Js("boom".into()), "JavaScript error: boom")]
	fn test_dom_error_display(#[case] error: DomError, #[case] expected: &str) {
		assert_eq!(error.to_string(), expected);
	}
}
