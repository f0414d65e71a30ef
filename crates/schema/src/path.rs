//! Variable-access paths and their extraction from line text.

use std::sync::LazyLock;

use regex::Regex;

/// Longest trailing variable-access expression, e.g. `product.images[0].src`.
static ACCESS_EXPR: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[a-zA-Z_][\w\-.\[\]]*$").expect("access expression pattern is valid"));

/// A parsed variable-access expression.
///
/// `user.tags[0]` parses to the segments `user`, `tags`, `0`. The first
/// segment names a schema-set entry, the rest are resolved against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
	segments: Vec<String>,
	trailing_separator: bool,
}

impl Path {
	/// Splits `expr` on `.`, `[` and `]`, dropping empty segments.
	pub fn parse(expr: &str) -> Self {
		let segments = expr
			.split(['.', '[', ']'])
			.filter(|s| !s.is_empty())
			.map(str::to_string)
			.collect();
		let trailing_separator = expr.ends_with(['.', '[']);
		Self {
			segments,
			trailing_separator,
		}
	}

	/// Builds a path from ready-made segments.
	pub fn from_segments<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
		Self {
			segments: segments.into_iter().map(Into::into).collect(),
			trailing_separator: false,
		}
	}

	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// The top-level variable name.
	pub fn head(&self) -> Option<&str> {
		self.segments.first().map(String::as_str)
	}

	/// Everything after the top-level variable name.
	pub fn tail(&self) -> &[String] {
		self.segments.get(1..).unwrap_or_default()
	}

	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// True when the source text ended in `.` or `[`, i.e. the user is about
	/// to type a new segment rather than in the middle of one.
	pub fn ends_with_separator(&self) -> bool {
		self.trailing_separator
	}

	/// Joins the segments back with `.`.
	pub fn display(&self) -> String {
		self.segments.join(".")
	}
}

/// Returns the access expression that ends right before `column` (1-based)
/// on `line`, or `None` when the cursor follows whitespace or punctuation.
pub fn extract_access_expr(line: &str, column: u32) -> Option<&str> {
	let end = line
		.char_indices()
		.nth(column.saturating_sub(1) as usize)
		.map_or(line.len(), |(idx, _)| idx);
	ACCESS_EXPR.find(&line[..end]).map(|m| m.as_str())
}

/// Extracts and parses the path ending before `column` on `line`.
pub fn extract_path(line: &str, column: u32) -> Option<Path> {
	extract_access_expr(line, column).map(Path::parse)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("{{ user.name", 13, Some("user.name"))]
	#[case("{{ user.name }}", 13, Some("user.name"))]
	#[case("{{ user.tags[0]", 16, Some("user.tags[0]"))]
	#[case("{{ product.", 12, Some("product."))]
	#[case("{{ ", 4, None)]
	#[case("{{ user.name | ", 16, None)]
	#[case("{{ 42", 6, None)]
	#[case("{{ my-var.x", 12, Some("my-var.x"))]
	#[case("{{ héllo.wörld", 15, Some("héllo.wörld"))]
	#[case("{{ éa.b", 8, Some("a.b"))]
	#[case("", 1, None)]
	fn test_extract_access_expr(#[case] line: &str, #[case] column: u32, #[case] expected: Option<&str>) {
		assert_eq!(extract_access_expr(line, column), expected);
	}

	#[test]
	fn test_extract_stops_at_cursor() {
		let line = "{{ customer.email }}";
		assert_eq!(extract_access_expr(line, 12), Some("customer"));
		assert_eq!(extract_access_expr(line, 13), Some("customer."));
	}

	#[test]
	fn test_parse_splits_on_separators() {
		let path = Path::parse("user.tags[0].name");
		assert_eq!(path.segments(), ["user", "tags", "0", "name"]);
		assert_eq!(path.head(), Some("user"));
		assert_eq!(path.tail(), ["tags", "0", "name"]);
		assert!(!path.ends_with_separator());
	}

	#[test]
	fn test_parse_discards_empty_segments() {
		let path = Path::parse("a..b[][1]");
		assert_eq!(path.segments(), ["a", "b", "1"]);
		assert_eq!(path.display(), "a.b.1");
	}

	#[test]
	fn test_parse_trailing_separator() {
		let path = Path::parse("user.");
		assert_eq!(path.segments(), ["user"]);
		assert!(path.ends_with_separator());
		assert!(Path::parse("items[").ends_with_separator());
		assert!(Path::parse("").is_empty());
		assert!(Path::parse("user").tail().is_empty());
	}
}
