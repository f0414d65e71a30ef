//! Completion of variable names and member fields.
//!
//! Like hover, completion works on the access expression ending at the
//! cursor. The result carries the replacement range alongside the candidates
//! so the host knows which text an accepted item replaces. Candidates are not
//! filtered by the typed prefix; the host's completion widget does that.

use lantern_primitives::{Position, Range};
use lantern_schema::{Path, SchemaSet, TypeDescriptor, extract_access_expr, members};
use tracing::trace;

use crate::host::{DocumentId, Host};

/// Type of completion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
	/// Top-level schema variable.
	Variable,
	/// Member of an object.
	Field,
}

/// A single completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
	/// The text to display in the menu.
	pub label: String,
	/// The text that replaces `range`.
	pub insert_text: String,
	/// Rendered type of the candidate.
	pub detail: Option<String>,
	pub kind: CompletionKind,
	/// Span replaced when the item is accepted.
	pub range: Range,
}

impl CompletionItem {
	fn new(name: &str, ty: &TypeDescriptor, kind: CompletionKind, range: Range) -> Self {
		Self {
			label: name.to_string(),
			insert_text: name.to_string(),
			detail: Some(ty.render()),
			kind,
			range,
		}
	}
}

/// Result of a completion query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionResult {
	pub items: Vec<CompletionItem>,
}

impl CompletionResult {
	pub fn new(items: Vec<CompletionItem>) -> Self {
		Self { items }
	}

	/// Create an empty result (no completions).
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Labels in result order.
	pub fn labels(&self) -> Vec<&str> {
		self.items.iter().map(|item| item.label.as_str()).collect()
	}
}

/// Completes at `position` from `schemas`.
///
/// With no expression before the cursor, or a single partial name, every
/// top-level variable is offered. Otherwise the members of the parent path
/// are offered: the whole path after a trailing `.` or `[`, all but the
/// partial last segment elsewhere. Nothing is offered right after a closing
/// `]`.
pub fn complete(host: &dyn Host, doc: DocumentId, schemas: &SchemaSet, position: Position) -> CompletionResult {
	let Some(line) = host.line_text(doc, position.line) else {
		return CompletionResult::empty();
	};
	let range = host.word_at(doc, position).map_or_else(
		|| Range::point(position),
		|word| {
			Range::new(
				Position::new(position.line, word.start_column),
				Position::new(position.line, word.end_column),
			)
		},
	);

	let expr = extract_access_expr(&line, position.column);
	if expr.is_some_and(|e| e.ends_with(']')) {
		// A member after `[0]` needs a `.` first.
		return CompletionResult::empty();
	}
	let path = expr.map(Path::parse).filter(|p| !p.is_empty());
	let parent = match &path {
		Some(p) if p.ends_with_separator() => p.segments(),
		Some(p) if p.len() > 1 => &p.segments()[..p.len() - 1],
		_ => {
			let items = schemas
				.iter()
				.map(|(name, ty)| CompletionItem::new(name, ty, CompletionKind::Variable, range))
				.collect();
			return CompletionResult::new(items);
		}
	};

	let Some(owner) = schemas.resolve_segments(parent) else {
		trace!(?doc, parent = %parent.join("."), "completion parent not resolvable");
		return CompletionResult::empty();
	};
	let items = members(owner)
		.into_iter()
		.map(|(name, ty)| CompletionItem::new(name, ty, CompletionKind::Field, range))
		.collect();
	CompletionResult::new(items)
}

#[cfg(test)]
mod tests;
