//! Hover over variable expressions.

use lantern_primitives::{Position, Range};
use lantern_schema::{SchemaSet, extract_path};
use tracing::trace;

use crate::host::{DocumentId, Host};

/// Hover content anchored on a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hover {
	/// Markdown, e.g. ``**user.name**: `String` ``.
	pub contents: String,
	pub range: Range,
}

/// Resolves the expression ending at the word under `position`.
///
/// Hovering `name` in `user.name` describes `user.name`; hovering `user`
/// describes `user` alone.
pub fn hover(host: &dyn Host, doc: DocumentId, schemas: &SchemaSet, position: Position) -> Option<Hover> {
	let word = host.word_at(doc, position)?;
	let line = host.line_text(doc, position.line)?;
	let path = extract_path(&line, word.end_column)?;
	let Some(ty) = schemas.resolve(&path) else {
		trace!(?doc, path = %path.display(), "hover path not resolvable");
		return None;
	};

	Some(Hover {
		contents: format!("**{}**: `{}`", path.display(), ty.render()),
		range: Range::new(
			Position::new(position.line, word.start_column),
			Position::new(position.line, word.end_column),
		),
	})
}
