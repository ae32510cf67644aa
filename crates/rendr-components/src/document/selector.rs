//! Compound selector matching for the in-memory document.
//!
//! Only the subset needed to locate mount points is understood: an optional tag name
//! (or `*`) followed by any number of `#id` and `.class` parts, e.g. `div#app.dark`.
//! Combinators, attribute selectors and pseudo-classes are rejected.

use crate::error::DomError;

/// A parsed compound selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
	tag: Option<String>,
	id: Option<String>,
	classes: Vec<String>,
}

fn is_name(part: &str) -> bool {
	!part.is_empty()
		&& part
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl Selector {
	/// Parses `input`.
	///
	/// # Errors
	///
	/// Returns [`DomError::InvalidSelector`] for empty input and anything outside the
	/// supported subset.
	pub fn parse(input: &str) -> Result<Self, DomError> {
		let invalid = || DomError::InvalidSelector(input.to_string());
		let trimmed = input.trim();
		if trimmed.is_empty() {
			return Err(invalid());
		}

		let mut selector = Self::default();
		let end = trimmed.find(['#', '.']).unwrap_or(trimmed.len());
		let (tag, mut rest) = trimmed.split_at(end);
		if !tag.is_empty() && tag != "*" {
			if !is_name(tag) {
				return Err(invalid());
			}
			selector.tag = Some(tag.to_ascii_lowercase());
		}

		while let Some(marker) = rest.chars().next() {
			rest = &rest[marker.len_utf8()..];
			let end = rest.find(['#', '.']).unwrap_or(rest.len());
			let (name, tail) = rest.split_at(end);
			if !is_name(name) {
				return Err(invalid());
			}
			match marker {
				'#' if selector.id.is_none() => selector.id = Some(name.to_string()),
				'.' => selector.classes.push(name.to_string()),
				_ => return Err(invalid()),
			}
			rest = tail;
		}

		Ok(selector)
	}

	/// Returns `true` if an element with the given tag, `id` and `class` attributes
	/// matches.
	pub fn matches(&self, tag: &str, id: Option<&str>, class: Option<&str>) -> bool {
		if let Some(expected) = &self.tag {
			if !expected.eq_ignore_ascii_case(tag) {
				return false;
			}
		}
		if let Some(expected) = &self.id {
			if id != Some(expected.as_str()) {
				return false;
			}
		}
		let present: Vec<&str> = class.map(|c| c.split_whitespace().collect()).unwrap_or_default();
		self.classes
			.iter()
			.all(|wanted| present.contains(&wanted.as_str()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("div", "div", None, None, true)]
	#[case("DIV", "div", None, None, true)]
	#[case("div", "span", None, None, false)]
	#[case("#app", "section", Some("app"), None, true)]
	#[case("#app", "section", Some("other"), None, false)]
	#[case(".card", "div", None, Some("big card"), true)]
	#[case(".card.big", "div", None, Some("card"), false)]
	#[case("div#app.dark", "div", Some("app"), Some("dark wide"), true)]
	#[case("*", "anything", None, None, true)]
	#[case("  #root ", "div", Some("root"), None, true)]
	fn test_matches(
		#[case] input: &str,
		#[case] tag: &str,
		#[case] id: Option<&str>,
		#[case] class: Option<&str>,
		#[case] expected: bool,
	) {
		let selector = Selector::parse(input).unwrap();
		assert_eq!(selector.matches(tag, id, class), expected);
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("div > p")]
	#[case("ul li")]
	#[case("a[href]")]
	#[case("a:hover")]
	#[case("#")]
	#[case("div.")]
	#[case("#a#b")]
	#[case("h1, h2")]
	fn test_rejects_unsupported(#[case] input: &str) {
		assert_eq!(
			Selector::parse(input),
			Err(DomError::InvalidSelector(input.to_string()))
		);
	}
}
