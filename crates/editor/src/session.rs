//! The entry point a host drives.
//!
//! A [`Session`] owns the per-document side table and the pending validation
//! deadlines. The host forwards change notifications with the current time
//! and polls whenever the timer it armed from [`Session::next_deadline`]
//! fires.

use std::sync::Arc;
use std::time::Instant;

use lantern_primitives::Position;
use lantern_schema::SchemaSet;
use tracing::{debug, trace};

use crate::completion::{self, CompletionResult};
use crate::config::{Config, ValidationOptions};
use crate::documents::DocumentTable;
use crate::host::{DocumentId, Host};
use crate::hover::{self, Hover};
use crate::pending::PendingValidationState;
use crate::validation::{self, ValidationAttachment};

/// Owner name for every diagnostic marker Lantern publishes.
pub const DIAGNOSTIC_OWNER: &str = "liquid";

/// Editor-side state for every document the host has handed over.
#[derive(Debug)]
pub struct Session {
	config: Config,
	documents: DocumentTable,
	pending: PendingValidationState,
}

impl Default for Session {
	fn default() -> Self {
		Self::new(Config::default())
	}
}

impl Session {
	pub fn new(config: Config) -> Self {
		Self {
			config,
			documents: DocumentTable::default(),
			pending: PendingValidationState::new(),
		}
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Sets the schema set used for hover and completion in `doc`.
	pub fn set_schemas(&mut self, doc: DocumentId, schemas: Arc<SchemaSet>) {
		debug!(?doc, variables = schemas.len(), "schemas set");
		self.documents.entry(doc).schemas = Some(schemas);
	}

	pub fn clear_schemas(&mut self, doc: DocumentId) {
		if let Some(state) = self.documents.get_mut(doc) {
			state.schemas = None;
		}
		self.documents.prune(doc);
	}

	pub fn schemas(&self, doc: DocumentId) -> Option<&SchemaSet> {
		self.documents.get(doc)?.schemas.as_deref()
	}

	/// Attaches validation with the session's configured options.
	///
	/// See [`Session::attach_validation_with`].
	pub fn attach_validation(&mut self, host: &mut dyn Host, doc: DocumentId) -> bool {
		let options = self.config.validation;
		self.attach_validation_with(host, doc, options)
	}

	/// Subscribes to changes of `doc` and runs an initial validation pass.
	///
	/// Returns false, doing nothing, if validation is already attached.
	pub fn attach_validation_with(&mut self, host: &mut dyn Host, doc: DocumentId, options: ValidationOptions) -> bool {
		let state = self.documents.entry(doc);
		if state.validation.is_some() {
			return false;
		}
		let subscription = host.subscribe_changes(doc);
		state.validation = Some(ValidationAttachment {
			subscription,
			options,
			passes: 0,
		});
		debug!(?doc, debounce_ms = options.debounce_ms, "validation attached");

		self.run_pass(host, doc);
		true
	}

	/// Records a content change at `now`, restarting the debounce window.
	///
	/// Returns false when `doc` has no validation attached.
	pub fn notify_change(&mut self, doc: DocumentId, now: Instant) -> bool {
		let Some(attachment) = self.documents.get(doc).and_then(|state| state.validation.as_ref()) else {
			trace!(?doc, "change ignored, validation not attached");
			return false;
		};
		self.pending.note_change(doc, now, attachment.options.debounce());
		true
	}

	/// Runs every validation pass due at `now`. Returns how many ran.
	pub fn poll(&mut self, host: &mut dyn Host, now: Instant) -> usize {
		let due = self.pending.take_due(now);
		if due.is_empty() {
			return 0;
		}

		let ran = due.into_iter().filter(|&doc| self.run_pass(host, doc).is_some()).count();
		debug!(passes = ran, pending = self.pending.pending_count(), "validation poll");
		ran
	}

	/// Earliest instant at which [`Session::poll`] has work to do.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.pending.next_deadline()
	}

	/// Validates `doc` immediately, dropping any pending deadline.
	pub fn validate_now(&mut self, host: &mut dyn Host, doc: DocumentId) -> Option<usize> {
		self.pending.cancel(doc);
		self.run_pass(host, doc)
	}

	/// Cancels pending work, unsubscribes and clears published diagnostics.
	///
	/// Returns false if validation was not attached.
	pub fn detach_validation(&mut self, host: &mut dyn Host, doc: DocumentId) -> bool {
		let Some(attachment) = self.documents.get_mut(doc).and_then(|state| state.validation.take()) else {
			return false;
		};
		self.pending.cancel(doc);
		host.unsubscribe(attachment.subscription);
		host.set_diagnostics(doc, DIAGNOSTIC_OWNER, Vec::new());
		self.documents.prune(doc);
		debug!(?doc, passes = attachment.passes, "validation detached");
		true
	}

	/// Detaches validation and forgets everything about `doc`.
	pub fn dispose_document(&mut self, host: &mut dyn Host, doc: DocumentId) {
		self.detach_validation(host, doc);
		self.pending.cancel(doc);
		if self.documents.remove(doc).is_some() {
			debug!(?doc, "document disposed");
		}
	}

	/// Hover at `position`, or `None` without a schema set or a resolvable path.
	pub fn hover(&self, host: &dyn Host, doc: DocumentId, position: Position) -> Option<Hover> {
		hover::hover(host, doc, self.schemas(doc)?, position)
	}

	/// Completion at `position`. Empty without a schema set.
	pub fn completion(&self, host: &dyn Host, doc: DocumentId, position: Position) -> CompletionResult {
		match self.schemas(doc) {
			Some(schemas) => completion::complete(host, doc, schemas, position),
			None => CompletionResult::empty(),
		}
	}

	pub fn is_attached(&self, doc: DocumentId) -> bool {
		self.documents.get(doc).is_some_and(|state| state.validation.is_some())
	}

	/// Passes run for `doc` since validation was attached.
	pub fn passes(&self, doc: DocumentId) -> Option<u64> {
		Some(self.documents.get(doc)?.validation.as_ref()?.passes)
	}

	pub fn has_pending(&self, doc: DocumentId) -> bool {
		self.pending.is_pending(doc)
	}

	/// Changes folded into the pending pass for `doc`.
	pub fn pending_changes(&self, doc: DocumentId) -> Option<u32> {
		self.pending.get(doc).map(|pending| pending.changes)
	}

	/// Whether the side table holds any state for `doc`.
	pub fn is_tracked(&self, doc: DocumentId) -> bool {
		self.documents.contains(doc)
	}

	pub fn tracked_documents(&self) -> usize {
		self.documents.len()
	}

	fn run_pass(&mut self, host: &mut dyn Host, doc: DocumentId) -> Option<usize> {
		let count = validation::run_pass(host, doc)?;
		if let Some(attachment) = self.documents.get_mut(doc).and_then(|state| state.validation.as_mut()) {
			attachment.passes += 1;
		}
		Some(count)
	}
}
