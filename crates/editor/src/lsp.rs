//! Conversion of hover, completion and folding results into LSP types.
//!
//! Diagnostics and coordinates convert through
//! [`lantern_primitives::lsp`], re-exported here.

use lsp_types::{
	CompletionItemKind, CompletionResponse, CompletionTextEdit, FoldingRangeKind, HoverContents, MarkupContent,
	MarkupKind, TextEdit,
};

pub use lantern_primitives::lsp::{
	DIAGNOSTIC_SOURCE, from_lsp_position, to_lsp_diagnostic, to_lsp_position, to_lsp_range, to_lsp_severity,
};

use crate::completion::{CompletionItem, CompletionKind, CompletionResult};
use crate::hover::Hover;

/// Converts a hover into a markdown LSP hover.
pub fn to_lsp_hover(hover: &Hover) -> lsp_types::Hover {
	lsp_types::Hover {
		contents: HoverContents::Markup(MarkupContent {
			kind: MarkupKind::Markdown,
			value: hover.contents.clone(),
		}),
		range: Some(to_lsp_range(hover.range)),
	}
}

pub fn to_lsp_completion_kind(kind: CompletionKind) -> CompletionItemKind {
	match kind {
		CompletionKind::Variable => CompletionItemKind::VARIABLE,
		CompletionKind::Field => CompletionItemKind::FIELD,
	}
}

/// Converts a completion item, expressing the replacement as a text edit.
pub fn to_lsp_completion_item(item: &CompletionItem) -> lsp_types::CompletionItem {
	lsp_types::CompletionItem {
		label: item.label.clone(),
		kind: Some(to_lsp_completion_kind(item.kind)),
		detail: item.detail.clone(),
		text_edit: Some(CompletionTextEdit::Edit(TextEdit {
			range: to_lsp_range(item.range),
			new_text: item.insert_text.clone(),
		})),
		..Default::default()
	}
}

pub fn to_lsp_completion_response(result: &CompletionResult) -> CompletionResponse {
	CompletionResponse::Array(result.items.iter().map(to_lsp_completion_item).collect())
}

/// Converts 1-based `(start, end)` line spans into folding ranges.
pub fn to_lsp_folding_ranges(spans: &[(u32, u32)]) -> Vec<lsp_types::FoldingRange> {
	spans
		.iter()
		.map(|&(start, end)| lsp_types::FoldingRange {
			start_line: start.saturating_sub(1),
			end_line: end.saturating_sub(1),
			kind: Some(FoldingRangeKind::Region),
			..Default::default()
		})
		.collect()
}
