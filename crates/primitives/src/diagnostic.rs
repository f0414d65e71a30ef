use serde::Serialize;

use crate::position::Range;

/// Severity of a diagnostic, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	/// A hint or suggestion.
	Hint,
	/// An informational message.
	Information,
	/// A warning.
	Warning,
	/// An error.
	Error,
}

/// A positioned problem report published to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
	/// How severe the problem is.
	pub severity: Severity,
	/// Human-readable description.
	pub message: String,
	/// Where the problem is.
	pub range: Range,
}

impl Diagnostic {
	/// Creates an error diagnostic.
	pub fn error(message: impl Into<String>, range: Range) -> Self {
		Self {
			severity: Severity::Error,
			message: message.into(),
			range,
		}
	}
}
