//! Structural validation for Liquid templates.
//!
//! The validator checks that block tags (`{% if %}` ... `{% endif %}`) and
//! output expressions (`{{ ... }}`) are balanced across a whole document. It
//! does not parse expressions. Every problem becomes a
//! [`Diagnostic`](lantern_primitives::Diagnostic); nothing here fails.
//!
//! Mismatched closers always pop the stack. A single missing `endif` deep in
//! a nest can therefore surface as a cascade of mismatches further out,
//! which is preferred over stalling the scan.

pub mod grammar;
pub mod stack;
mod validator;

pub use grammar::{BLOCK_TAGS, is_block_tag};
pub use validator::{Validator, validate};
