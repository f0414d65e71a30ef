//! Per-document side table.
//!
//! Keyed by the host's document identity. An entry exists while a document
//! has a schema set or a validation attachment and is removed when the
//! document is disposed.

use std::sync::Arc;

use lantern_schema::SchemaSet;
use rustc_hash::FxHashMap;

use crate::host::DocumentId;
use crate::validation::ValidationAttachment;

#[derive(Debug, Default)]
pub struct DocumentState {
	pub schemas: Option<Arc<SchemaSet>>,
	pub validation: Option<ValidationAttachment>,
}

impl DocumentState {
	fn is_empty(&self) -> bool {
		self.schemas.is_none() && self.validation.is_none()
	}
}

#[derive(Debug, Default)]
pub struct DocumentTable {
	entries: FxHashMap<DocumentId, DocumentState>,
}

impl DocumentTable {
	pub fn get(&self, doc: DocumentId) -> Option<&DocumentState> {
		self.entries.get(&doc)
	}

	pub fn get_mut(&mut self, doc: DocumentId) -> Option<&mut DocumentState> {
		self.entries.get_mut(&doc)
	}

	/// Returns the entry for `doc`, creating an empty one if needed.
	pub fn entry(&mut self, doc: DocumentId) -> &mut DocumentState {
		self.entries.entry(doc).or_default()
	}

	pub fn remove(&mut self, doc: DocumentId) -> Option<DocumentState> {
		self.entries.remove(&doc)
	}

	/// Drops the entry for `doc` if it no longer carries any state.
	pub fn prune(&mut self, doc: DocumentId) {
		if self.entries.get(&doc).is_some_and(DocumentState::is_empty) {
			self.entries.remove(&doc);
		}
	}

	pub fn contains(&self, doc: DocumentId) -> bool {
		self.entries.contains_key(&doc)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}
}
