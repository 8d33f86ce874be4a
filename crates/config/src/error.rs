//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A locale tag could not be parsed.
	#[error("invalid locale {value:?}: {reason}")]
	InvalidLocale {
		/// The rejected tag.
		value: String,
		/// Parser message.
		reason: String,
	},
}

/// Non-fatal issue found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A key this crate does not recognize; it is ignored.
	UnknownKey {
		/// Enclosing table, `None` at the top level.
		section: Option<String>,
		key: String,
	},
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::UnknownKey {
				section: Some(section),
				key,
			} => write!(f, "unknown key '{key}' in [{section}] will be ignored"),
			Self::UnknownKey { section: None, key } => {
				write!(f, "unknown top-level key '{key}' will be ignored")
			}
		}
	}
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
