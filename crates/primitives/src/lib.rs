//! Shared coordinate and diagnostic types.
//!
//! Every position in Lantern is 1-based in both line and column, matching
//! the addressing the host editor uses for its document model. Columns count
//! Unicode scalar values. Conversion into zero-based LSP coordinates lives in
//! [`lsp`].

/// Diagnostic records and severities.
pub mod diagnostic;
/// Conversions into `lsp-types` structures.
pub mod lsp;
/// 1-based positions and half-open ranges.
pub mod position;

pub use diagnostic::{Diagnostic, Severity};
pub use position::{Position, Range, char_column};
