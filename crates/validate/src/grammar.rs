//! Line-scoped lexical forms of Liquid delimiters.
//!
//! ```text
//! {% name ... %}      {%- name ... -%}     opening or standalone tag
//! {% endname %}                            closing tag
//! {{   {{-                                 output open
//! }}   -}}                                 output close
//! ```
//!
//! The `-` trim modifier is accepted everywhere and ignored for matching.

use std::sync::LazyLock;

use lantern_primitives::char_column;
use regex::Regex;

/// Tags that open a block and must be closed by `end<name>`.
pub const BLOCK_TAGS: &[&str] = &[
	"if",
	"unless",
	"case",
	"for",
	"tablerow",
	"comment",
	"raw",
	"capture",
	"form",
	"paginate",
	"layout",
	"block",
	"schema",
	"stylesheet",
	"javascript",
	"liquid",
];

/// Prefix that turns a block name into its closing tag name.
pub const END_PREFIX: &str = "end";

/// Label used for output frames in messages.
pub const OUTPUT_OPEN_LABEL: &str = "{{";

/// Label used for stray output closers in messages.
pub const OUTPUT_CLOSE_LABEL: &str = "}}";

/// Tags, output openers and output closers, tried in that order at each offset.
static DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\{%-?\s*(?<tag>\w+).*?%\}|(?<open>\{\{-?)|(?<close>-?\}\})").expect("delimiter pattern is valid")
});

/// What a lexed delimiter means for nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
	OutputOpen,
	OutputClose,
	/// An opening block tag, carrying the block name.
	BlockOpen(String),
	/// A closing tag, carrying the name without the `end` prefix.
	BlockClose(String),
	/// A tag that does not nest (`assign`, `else`, `include`, ...).
	Tag(String),
}

/// A delimiter occurrence on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
	pub kind: TokenKind,
	/// 1-based column of the first character.
	pub column: u32,
	/// Length in characters.
	pub len: u32,
}

/// Returns true if `name` opens a block.
pub fn is_block_tag(name: &str) -> bool {
	!name.starts_with(END_PREFIX) && BLOCK_TAGS.contains(&name)
}

/// Classifies a tag name.
pub fn classify_tag(name: &str) -> TokenKind {
	if is_block_tag(name) {
		return TokenKind::BlockOpen(name.to_string());
	}
	match name.strip_prefix(END_PREFIX) {
		Some(block) if !block.is_empty() => TokenKind::BlockClose(block.to_string()),
		_ => TokenKind::Tag(name.to_string()),
	}
}

/// Lexes every delimiter on `line`, ordered by column.
///
/// Text inside one construct is quoted text for the other. Output markers
/// inside a `{% ... %}` tag (for instance a quoted `"{{"` in an `assign`) are
/// consumed by the tag, and tags inside an output opened earlier on the same
/// line (`{{ "{% if a %}" }}`) are skipped.
pub fn scan_line(line: &str) -> Vec<Token> {
	let mut tokens = Vec::new();
	let mut open_outputs = 0usize;
	let mut at = 0;

	while let Some(caps) = DELIMITER.captures_at(line, at) {
		let Some(whole) = caps.get(0) else {
			break;
		};
		at = whole.end();

		let kind = if caps.name("open").is_some() {
			open_outputs += 1;
			TokenKind::OutputOpen
		} else if caps.name("close").is_some() {
			open_outputs = open_outputs.saturating_sub(1);
			TokenKind::OutputClose
		} else if open_outputs > 0 {
			// Resume right after `{%` so a closer swallowed by the tag match is still seen.
			at = whole.start() + 2;
			continue;
		} else if let Some(name) = caps.name("tag") {
			classify_tag(name.as_str())
		} else {
			continue;
		};
		tokens.push(token_at(line, kind, whole.start(), whole.end()));
	}

	tokens
}

fn token_at(line: &str, kind: TokenKind, start: usize, end: usize) -> Token {
	let column = char_column(line, start);
	let len = char_column(line, end) - column;
	Token { kind, column, len }
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	fn kinds(line: &str) -> Vec<TokenKind> {
		scan_line(line).into_iter().map(|t| t.kind).collect()
	}

	#[rstest]
	#[case("if", TokenKind::BlockOpen("if".into()))]
	#[case("paginate", TokenKind::BlockOpen("paginate".into()))]
	#[case("endif", TokenKind::BlockClose("if".into()))]
	#[case("endwhatever", TokenKind::BlockClose("whatever".into()))]
	#[case("end", TokenKind::Tag("end".into()))]
	#[case("assign", TokenKind::Tag("assign".into()))]
	#[case("else", TokenKind::Tag("else".into()))]
	#[case("123", TokenKind::Tag("123".into()))]
	fn test_classify_tag(#[case] name: &str, #[case] expected: TokenKind) {
		assert_eq!(classify_tag(name), expected);
	}

	#[test]
	fn test_scan_orders_by_column() {
		let tokens = scan_line("{% if x %}{{ y }}{% endif %}");
		assert_eq!(
			tokens,
			vec![
				Token {
					kind: TokenKind::BlockOpen("if".into()),
					column: 1,
					len: 10,
				},
				Token {
					kind: TokenKind::OutputOpen,
					column: 11,
					len: 2,
				},
				Token {
					kind: TokenKind::OutputClose,
					column: 16,
					len: 2,
				},
				Token {
					kind: TokenKind::BlockClose("if".into()),
					column: 18,
					len: 11,
				},
			]
		);
	}

	#[test]
	fn test_scan_trim_markers() {
		let tokens = scan_line("{%- for p in products -%}{{- p.title -}}{%- endfor -%}");
		assert_eq!(tokens[0].kind, TokenKind::BlockOpen("for".into()));
		assert_eq!(tokens[1].kind, TokenKind::OutputOpen);
		assert_eq!(tokens[1].len, 3);
		assert_eq!(tokens[2].kind, TokenKind::OutputClose);
		assert_eq!(tokens[2].len, 3);
		assert_eq!(tokens[3].kind, TokenKind::BlockClose("for".into()));
	}

	#[test]
	fn test_scan_skips_markers_inside_tags() {
		assert_eq!(kinds(r#"{% assign open = "{{" %}"#), vec![TokenKind::Tag("assign".into())]);
	}

	#[test]
	fn test_scan_skips_tags_inside_outputs() {
		assert_eq!(kinds(r#"{{ "{% if a %}" }}"#), vec![TokenKind::OutputOpen, TokenKind::OutputClose]);
		assert_eq!(
			kinds(r#"{{ "{% if" }}{% endif %}"#),
			vec![
				TokenKind::OutputOpen,
				TokenKind::OutputClose,
				TokenKind::BlockClose("if".into())
			]
		);
	}

	#[test]
	fn test_scan_ignores_malformed_tags() {
		assert!(scan_line("{% %}").is_empty());
		assert!(scan_line("{% if x").is_empty());
		assert!(scan_line("plain text { % } %}").is_empty());
	}

	#[test]
	fn test_scan_columns_count_chars() {
		let tokens = scan_line("héllo {{ x }}");
		assert_eq!(tokens[0].column, 7);
		assert_eq!(tokens[1].column, 12);
	}
}
