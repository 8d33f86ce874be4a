//! Configuration for tint.
//!
//! Configuration is written in TOML and covers the ambient context the
//! re-injection engine starts from:
//!
//! ```toml
//! [theme]
//! default = "dark"          # theme active at startup
//!
//! [locale]
//! default = "en-US"         # application locale at startup
//!
//! [injection]
//! sweep-policy = "isolate"  # or "abort"
//! ```
//!
//! Every key is optional. Unknown keys are reported in [`Config::warnings`]
//! rather than failing the parse.

pub mod error;
mod sections;

use std::path::Path;
use std::str::FromStr;

pub use error::{ConfigError, ConfigWarning, Result};
pub use sections::SweepPolicy;
use sections::{KNOWN_KEYS, RawConfig};
use unic_langid::LanguageIdentifier;


/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Parsed configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
	/// Theme to activate at startup; the registry's own default when unset.
	pub theme: Option<String>,
	/// Application locale at startup.
	pub locale: Option<LanguageIdentifier>,
	/// Failure handling for re-injection sweeps.
	pub sweep_policy: Option<SweepPolicy>,
	/// Non-fatal warnings encountered during parsing.
	pub warnings: Vec<ConfigWarning>,
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(input)?;
		let table: toml::Table = toml::from_str(input)?;

		let locale = raw
			.locale
			.default
			.as_deref()
			.map(parse_locale)
			.transpose()?;

		let warnings = unknown_keys(&table);
		for warning in &warnings {
			tracing::warn!(%warning, "config warning");
		}

		Ok(Config {
			theme: raw.theme.default,
			locale,
			sweep_policy: raw.injection.sweep_policy,
			warnings,
		})
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		tracing::debug!(path = %path.display(), "loading config");
		Self::parse(&content)
	}

	/// Merge another config into this one.
	///
	/// Values set in `other` override values in `self`.
	pub fn merge(&mut self, other: Config) {
		if other.theme.is_some() {
			self.theme = other.theme;
		}
		if other.locale.is_some() {
			self.locale = other.locale;
		}
		if other.sweep_policy.is_some() {
			self.sweep_policy = other.sweep_policy;
		}
		self.warnings.extend(other.warnings);
	}

	/// Configured locale, or [`DEFAULT_LOCALE`].
	pub fn locale_or_default(&self) -> LanguageIdentifier {
		self.locale.clone().unwrap_or_else(|| {
			LanguageIdentifier::from_str(DEFAULT_LOCALE).unwrap_or_default()
		})
	}

	/// Configured sweep policy, or [`SweepPolicy::Isolate`].
	pub fn sweep_policy_or_default(&self) -> SweepPolicy {
		self.sweep_policy.unwrap_or_default()
	}
}

/// Parse a BCP 47 tag such as `en-US` or `sr-Latn`.
pub fn parse_locale(value: &str) -> Result<LanguageIdentifier> {
	LanguageIdentifier::from_str(value).map_err(|e| ConfigError::InvalidLocale {
		value: value.to_owned(),
		reason: e.to_string(),
	})
}

fn unknown_keys(table: &toml::Table) -> Vec<ConfigWarning> {
	let mut warnings = Vec::new();
	for (key, value) in table {
		let Some((_, known)) = KNOWN_KEYS.iter().find(|(section, _)| section == key) else {
			warnings.push(ConfigWarning::UnknownKey {
				section: None,
				key: key.clone(),
			});
			continue;
		};
		if let Some(inner) = value.as_table() {
			for inner_key in inner.keys() {
				if !known.contains(&inner_key.as_str()) {
					warnings.push(ConfigWarning::UnknownKey {
						section: Some(key.clone()),
						key: inner_key.clone(),
					});
				}
			}
		}
	}
	warnings
}
