//! Schema-driven type resolution for template variables.
//!
//! * [`descriptor`]: the [`TypeDescriptor`] tree, unwrapping and rendering
//! * [`path`]: [`Path`] parsing and extraction of the expression under a cursor
//! * [`resolve`](mod@resolve): walking a [`Path`] through a descriptor tree
//! * [`SchemaSet`]: top-level variables, loaded from JSON
//!
//! Resolution never fails loudly. A path that leaves the schema yields `None`
//! and callers simply have nothing to show.

pub mod descriptor;
pub mod error;
pub mod path;
pub mod resolve;
mod set;

pub use descriptor::{LiteralValue, TypeDescriptor};
pub use error::{Result, SchemaError};
pub use path::{Path, extract_access_expr, extract_path};
pub use resolve::{is_index_segment, members, resolve};
pub use set::SchemaSet;

#[cfg(test)]
mod tests;
