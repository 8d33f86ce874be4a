//! Typed configuration sections.

use serde::{Deserialize, Serialize};

/// What a re-injection sweep does when one tracked instance fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepPolicy {
	/// Report the failure and continue with the remaining instances.
	#[default]
	Isolate,
	/// Stop the sweep at the first failure.
	Abort,
}

/// `[theme]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct ThemeSection {
	pub default: Option<String>,
}

/// `[locale]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct LocaleSection {
	pub default: Option<String>,
}

/// `[injection]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct InjectionSection {
	pub sweep_policy: Option<SweepPolicy>,
}

/// Whole document as written on disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawConfig {
	pub theme: ThemeSection,
	pub locale: LocaleSection,
	pub injection: InjectionSection,
}

/// Known keys per table, used to report unknown ones.
pub(crate) const KNOWN_KEYS: &[(&str, &[&str])] = &[
	("theme", &["default"]),
	("locale", &["default"]),
	("injection", &["sweep-policy"]),
];
