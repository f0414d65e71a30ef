//! Conversion of Lantern coordinates and diagnostics into LSP types.
//!
//! LSP positions are zero-based. Columns are passed through as scalar-value
//! counts; hosts that negotiate UTF-16 offsets must remap non-BMP text.

use lsp_types::DiagnosticSeverity;

use crate::{Diagnostic, Position, Range, Severity};

/// Source string attached to every converted diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "liquid";

/// Converts a 1-based position into an LSP position.
pub fn to_lsp_position(pos: Position) -> lsp_types::Position {
	lsp_types::Position {
		line: pos.line.saturating_sub(1),
		character: pos.column.saturating_sub(1),
	}
}

/// Converts a 1-based range into an LSP range.
pub fn to_lsp_range(range: Range) -> lsp_types::Range {
	lsp_types::Range {
		start: to_lsp_position(range.start),
		end: to_lsp_position(range.end),
	}
}

/// Converts an LSP position into a 1-based position.
pub fn from_lsp_position(pos: lsp_types::Position) -> Position {
	Position::new(pos.line + 1, pos.character + 1)
}

/// Maps a severity onto the LSP severity constants.
pub fn to_lsp_severity(severity: Severity) -> DiagnosticSeverity {
	match severity {
		Severity::Error => DiagnosticSeverity::ERROR,
		Severity::Warning => DiagnosticSeverity::WARNING,
		Severity::Information => DiagnosticSeverity::INFORMATION,
		Severity::Hint => DiagnosticSeverity::HINT,
	}
}

/// Converts a diagnostic into its LSP form.
pub fn to_lsp_diagnostic(diag: &Diagnostic) -> lsp_types::Diagnostic {
	lsp_types::Diagnostic {
		range: to_lsp_range(diag.range),
		severity: Some(to_lsp_severity(diag.severity)),
		code: None,
		code_description: None,
		source: Some(DIAGNOSTIC_SOURCE.into()),
		message: diag.message.clone(),
		related_information: None,
		tags: None,
		data: None,
	}
}
