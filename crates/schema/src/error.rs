//! Error types for schema loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a schema set.
#[derive(Debug, Error)]
pub enum SchemaError {
	/// The schema document is not valid JSON or does not describe descriptors.
	#[error("invalid schema at `{path}`: {message}")]
	Parse {
		/// JSON path of the offending value.
		path: String,
		/// Underlying decoder message.
		message: String,
	},

	/// Error reading a schema file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
