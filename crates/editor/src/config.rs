//! TOML configuration.
//!
//! ```toml
//! [validation]
//! debounce-ms = 300
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Debounce window used when nothing is configured.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
	pub validation: ValidationOptions,
}

/// Options accepted by a validation attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ValidationOptions {
	/// Quiet period after the last change before a pass runs.
	pub debounce_ms: u64,
}

impl Default for ValidationOptions {
	fn default() -> Self {
		Self {
			debounce_ms: DEFAULT_DEBOUNCE_MS,
		}
	}
}

impl ValidationOptions {
	/// The quiet period, never shorter than one millisecond.
	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms.max(1))
	}

	fn check(&self) -> Result<()> {
		if self.debounce_ms == 0 {
			return Err(ConfigError::InvalidDebounce(self.debounce_ms));
		}
		Ok(())
	}
}

impl Config {
	/// Parses configuration from TOML text.
	pub fn parse(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validation.check()?;
		Ok(config)
	}

	/// Reads and parses a configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::parse(&input)?;
		tracing::debug!(path = %path.display(), debounce_ms = config.validation.debounce_ms, "loaded config");
		Ok(config)
	}
}
