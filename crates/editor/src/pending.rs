//! Pending validation deadlines for debounced passes.
//!
//! Every change notification restarts the document's quiet period. The
//! session polls with the current time and receives the documents whose
//! quiet period has run out, each exactly once.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::host::DocumentId;

/// Pending validation for a single document.
#[derive(Debug, Clone, Copy)]
pub struct PendingValidation {
	/// When the most recent change was reported.
	pub last_change_at: Instant,
	/// Quiet period this document waits for.
	pub debounce: Duration,
	/// Changes folded into this pass.
	pub changes: u32,
}

impl PendingValidation {
	pub fn deadline(&self) -> Instant {
		self.last_change_at + self.debounce
	}

	/// Returns true once the quiet period has elapsed.
	pub fn is_due(&self, now: Instant) -> bool {
		now >= self.deadline()
	}
}

/// Per-document validation deadlines.
#[derive(Debug, Default)]
pub struct PendingValidationState {
	pending: FxHashMap<DocumentId, PendingValidation>,
}

impl PendingValidationState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a change, pushing the document's deadline to `now + debounce`.
	pub fn note_change(&mut self, doc: DocumentId, now: Instant, debounce: Duration) {
		let entry = self.pending.entry(doc).or_insert(PendingValidation {
			last_change_at: now,
			debounce,
			changes: 0,
		});
		entry.last_change_at = now;
		entry.debounce = debounce;
		entry.changes += 1;
		trace!(?doc, changes = entry.changes, "validation deadline rescheduled");
	}

	/// Drops any pending pass for `doc`. Returns true if one was pending.
	pub fn cancel(&mut self, doc: DocumentId) -> bool {
		self.pending.remove(&doc).is_some()
	}

	/// Removes and returns every document whose deadline is `<= now`,
	/// ordered by document id.
	pub fn take_due(&mut self, now: Instant) -> Vec<DocumentId> {
		let mut due: Vec<_> = self
			.pending
			.iter()
			.filter(|(_, pending)| pending.is_due(now))
			.map(|(&doc, _)| doc)
			.collect();
		due.sort_unstable();
		for doc in &due {
			self.pending.remove(doc);
		}
		due
	}

	/// Earliest pending deadline.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.pending.values().map(PendingValidation::deadline).min()
	}

	pub fn is_pending(&self, doc: DocumentId) -> bool {
		self.pending.contains_key(&doc)
	}

	pub fn get(&self, doc: DocumentId) -> Option<&PendingValidation> {
		self.pending.get(&doc)
	}

	pub fn pending_count(&self) -> usize {
		self.pending.len()
	}
}
