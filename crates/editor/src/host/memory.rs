//! Headless [`Host`] backed by in-memory strings.

use lantern_primitives::{Diagnostic, Position};
use rustc_hash::FxHashMap;

use super::{DocumentId, Host, SubscriptionId, WordAtPosition};

/// In-memory host used by the CLI and tests.
///
/// Editing a document through [`MemoryHost::set_text`] only changes the text.
/// Callers forward the change to the session themselves, the same way a real
/// host's subscription callback would.
#[derive(Debug, Default)]
pub struct MemoryHost {
	documents: FxHashMap<DocumentId, String>,
	subscriptions: FxHashMap<SubscriptionId, DocumentId>,
	next_subscription: u64,
	markers: FxHashMap<(DocumentId, String), Vec<Diagnostic>>,
	publishes: usize,
}

impl MemoryHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a document or replaces its text.
	pub fn open(&mut self, doc: DocumentId, text: impl Into<String>) {
		self.documents.insert(doc, text.into());
	}

	pub fn set_text(&mut self, doc: DocumentId, text: impl Into<String>) {
		self.open(doc, text);
	}

	/// Drops a document together with its markers.
	pub fn close(&mut self, doc: DocumentId) {
		self.documents.remove(&doc);
		self.markers.retain(|(marked, _), _| *marked != doc);
	}

	/// Markers currently published by `owner` for `doc`.
	pub fn diagnostics(&self, doc: DocumentId, owner: &str) -> &[Diagnostic] {
		self.markers
			.get(&(doc, owner.to_string()))
			.map_or(&[], Vec::as_slice)
	}

	pub fn is_subscribed(&self, doc: DocumentId) -> bool {
		self.subscriptions.values().any(|subscribed| *subscribed == doc)
	}

	/// Number of [`Host::set_diagnostics`] calls received so far.
	pub fn publish_count(&self) -> usize {
		self.publishes
	}
}

fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_' || c == '-'
}

impl Host for MemoryHost {
	fn text(&self, doc: DocumentId) -> Option<String> {
		self.documents.get(&doc).cloned()
	}

	fn line_text(&self, doc: DocumentId, line: u32) -> Option<String> {
		let text = self.documents.get(&doc)?;
		let line = text.split('\n').nth(line.checked_sub(1)? as usize)?;
		Some(line.strip_suffix('\r').unwrap_or(line).to_string())
	}

	fn word_at(&self, doc: DocumentId, position: Position) -> Option<WordAtPosition> {
		let line: Vec<char> = self.line_text(doc, position.line)?.chars().collect();
		let cursor = (position.column.saturating_sub(1) as usize).min(line.len());

		let mut start = cursor;
		while start > 0 && is_word_char(line[start - 1]) {
			start -= 1;
		}
		let mut end = cursor;
		while end < line.len() && is_word_char(line[end]) {
			end += 1;
		}
		if start == end {
			return None;
		}

		Some(WordAtPosition {
			word: line[start..end].iter().collect(),
			start_column: start as u32 + 1,
			end_column: end as u32 + 1,
		})
	}

	fn subscribe_changes(&mut self, doc: DocumentId) -> SubscriptionId {
		self.next_subscription += 1;
		let id = SubscriptionId(self.next_subscription);
		self.subscriptions.insert(id, doc);
		id
	}

	fn unsubscribe(&mut self, subscription: SubscriptionId) {
		self.subscriptions.remove(&subscription);
	}

	fn set_diagnostics(&mut self, doc: DocumentId, owner: &str, diagnostics: Vec<Diagnostic>) {
		self.publishes += 1;
		let key = (doc, owner.to_string());
		if diagnostics.is_empty() {
			self.markers.remove(&key);
		} else {
			self.markers.insert(key, diagnostics);
		}
	}
}
