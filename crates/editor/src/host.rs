//! The surface Lantern consumes from the host editor.
//!
//! The host owns document models. Lantern only ever reads their text, asks
//! for the word under a position and publishes diagnostic markers keyed by an
//! owner name. All positions are 1-based.

use lantern_primitives::{Diagnostic, Position};

mod memory;

pub use memory::MemoryHost;

/// Host-assigned identity of a document model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// Handle for a change-notification subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// The word under a position and its column span on that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordAtPosition {
	pub word: String,
	/// 1-based column of the first character.
	pub start_column: u32,
	/// 1-based column one past the last character.
	pub end_column: u32,
}

/// Operations the host editor provides.
///
/// Subscribed documents must be reported back through
/// [`Session::notify_change`](crate::Session::notify_change) whenever their
/// content changes.
pub trait Host {
	/// Full text of the document, or `None` if the host does not know it.
	fn text(&self, doc: DocumentId) -> Option<String>;

	/// Text of one line without its terminator.
	fn line_text(&self, doc: DocumentId, line: u32) -> Option<String>;

	/// Word at or immediately before `position`.
	fn word_at(&self, doc: DocumentId, position: Position) -> Option<WordAtPosition>;

	/// Starts delivering change notifications for `doc`.
	fn subscribe_changes(&mut self, doc: DocumentId) -> SubscriptionId;

	fn unsubscribe(&mut self, subscription: SubscriptionId);

	/// Replaces every marker `owner` has published for `doc`.
	fn set_diagnostics(&mut self, doc: DocumentId, owner: &str, diagnostics: Vec<Diagnostic>);
}
