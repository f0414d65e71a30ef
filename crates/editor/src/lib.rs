//! Editor integration for Liquid templates.
//!
//! The crate sits between a host editor and the pure analysis crates. The
//! host owns document text and UI surfaces and reaches Lantern through a
//! [`Session`]:
//!
//! * change notifications feed a debounced validation pass whose diagnostics
//!   are published back through [`Host::set_diagnostics`]
//! * hover and completion requests resolve the expression under the cursor
//!   against the document's [`SchemaSet`](lantern_schema::SchemaSet)
//! * [`language`] carries the static registration data for the `liquid` id
//!
//! Nothing here spawns threads or reads the clock. The host passes `now` into
//! every time-dependent call, which keeps the debounce deterministic.

pub mod completion;
pub mod config;
mod documents;
pub mod error;
pub mod host;
pub mod hover;
pub mod language;
pub mod lsp;
mod pending;
mod session;
mod validation;

pub use completion::{CompletionItem, CompletionKind, CompletionResult};
pub use config::{Config, ValidationOptions};
pub use error::{ConfigError, Result};
pub use host::{DocumentId, Host, MemoryHost, SubscriptionId, WordAtPosition};
pub use hover::Hover;
pub use session::{DIAGNOSTIC_OWNER, Session};
