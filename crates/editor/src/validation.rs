//! Validation attachment: one pass of the structural validator against the
//! host's current text, published under the session's marker owner.

use lantern_validate::validate;
use tracing::debug;

use crate::config::ValidationOptions;
use crate::host::{DocumentId, Host, SubscriptionId};
use crate::session::DIAGNOSTIC_OWNER;

/// Live validation for one document.
#[derive(Debug, Clone, Copy)]
pub struct ValidationAttachment {
	pub subscription: SubscriptionId,
	pub options: ValidationOptions,
	/// Passes run since attaching, including the initial one.
	pub passes: u64,
}

/// Validates the host's current text for `doc` and replaces the published
/// diagnostics. Returns the number of diagnostics, or `None` when the host
/// has no text for the document.
pub fn run_pass(host: &mut dyn Host, doc: DocumentId) -> Option<usize> {
	let text = host.text(doc)?;
	let diagnostics = validate(&text);
	let count = diagnostics.len();
	debug!(?doc, diagnostics = count, "validation pass");
	host.set_diagnostics(doc, DIAGNOSTIC_OWNER, diagnostics);
	Some(count)
}
