//! Registration data for the `liquid` language id.
//!
//! Everything here is static: the host reads it once when registering the
//! language. Folding markers are derived from the validator's block tags so
//! the two never disagree about what nests.

use std::sync::LazyLock;

use lantern_validate::BLOCK_TAGS;
use lantern_validate::grammar::END_PREFIX;
use regex::Regex;

/// Language identifier registered with the host.
pub const LANGUAGE_ID: &str = "liquid";

/// A pair of opening and closing strings.
pub type Pair = (&'static str, &'static str);

const BRACKETS: &[Pair] = &[("{%", "%}"), ("{{", "}}"), ("{", "}"), ("[", "]"), ("(", ")")];

const AUTO_CLOSING_PAIRS: &[Pair] = &[
	("{%", "%}"),
	("{{", "}}"),
	("{", "}"),
	("[", "]"),
	("(", ")"),
	("\"", "\""),
	("'", "'"),
];

const SURROUNDING_PAIRS: &[Pair] = &[
	("<", ">"),
	("{", "}"),
	("[", "]"),
	("(", ")"),
	("\"", "\""),
	("'", "'"),
];

static FOLD_START: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&format!(r"^\s*\{{%-?\s*(?:{})\b", BLOCK_TAGS.join("|"))).expect("fold start pattern is valid")
});

static FOLD_END: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&format!(r"^\s*\{{%-?\s*{END_PREFIX}(?:{})\b", BLOCK_TAGS.join("|")))
		.expect("fold end pattern is valid")
});

/// Static language registration.
#[derive(Debug, Clone, Copy)]
pub struct LanguageConfiguration {
	pub id: &'static str,
	pub extensions: &'static [&'static str],
	pub block_comment: Pair,
	pub brackets: &'static [Pair],
	pub auto_closing_pairs: &'static [Pair],
	pub surrounding_pairs: &'static [Pair],
}

impl LanguageConfiguration {
	/// Returns true if `line` starts a foldable block.
	pub fn is_folding_start(&self, line: &str) -> bool {
		FOLD_START.is_match(line)
	}

	/// Returns true if `line` ends a foldable block.
	pub fn is_folding_end(&self, line: &str) -> bool {
		FOLD_END.is_match(line)
	}

	/// Pairs folding markers by nesting and returns 1-based `(start, end)`
	/// line spans. Unpaired markers are ignored.
	pub fn folding_ranges(&self, text: &str) -> Vec<(u32, u32)> {
		let mut open = Vec::new();
		let mut ranges = Vec::new();
		for (idx, line) in text.lines().enumerate() {
			let number = idx as u32 + 1;
			if self.is_folding_end(line) {
				if let Some(start) = open.pop()
					&& number > start
				{
					ranges.push((start, number));
				}
			} else if self.is_folding_start(line) {
				open.push(number);
			}
		}
		ranges.sort_unstable();
		ranges
	}
}

/// Registration data for Liquid.
pub const LIQUID: LanguageConfiguration = LanguageConfiguration {
	id: LANGUAGE_ID,
	extensions: &[".liquid"],
	block_comment: ("{% comment %}", "{% endcomment %}"),
	brackets: BRACKETS,
	auto_closing_pairs: AUTO_CLOSING_PAIRS,
	surrounding_pairs: SURROUNDING_PAIRS,
};
