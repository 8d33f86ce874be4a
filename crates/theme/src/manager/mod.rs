use std::collections::BTreeSet;
use std::sync::Arc;

use tint_events::{PropertyChange, Subscription, VetoError};
use tint_resources::ResourceResolver;

use crate::error::ThemeError;

mod default;
#[cfg(test)]
mod tests;

pub use default::{DefaultThemeManager, ThemeManagerBuilder};

/// Name of the property carried by theme change notifications.
pub const PROPERTY_CURRENT_THEME: &str = "currentTheme";

/// Listener for applied theme changes.
pub type ThemeListener = Box<dyn Fn(&PropertyChange<String>) + Send + Sync>;
/// Listener that may reject a theme change before it is applied.
pub type ThemeVetoListener =
	Box<dyn Fn(&PropertyChange<String>) -> Result<(), VetoError> + Send + Sync>;

/// A registry of themes with one active theme.
pub trait ThemeManager: Send + Sync {
	/// Canonical names of all registered themes.
	fn themes(&self) -> BTreeSet<String>;

	/// Canonical name of the active theme.
	fn current_theme(&self) -> String;

	/// Activates `name` (a theme name or alias).
	///
	/// Fails with [`ThemeError::UnknownTheme`] for unregistered names and with
	/// [`ThemeError::Veto`] when a vetoable listener rejects the change. On
	/// failure the active theme is unchanged and no change is published.
	fn set_current_theme(&self, name: &str) -> Result<(), ThemeError>;

	/// Resolver for resources scoped to whichever theme is active at lookup
	/// time.
	fn resource_resolver(&self) -> Arc<dyn ResourceResolver>;

	/// Subscribes to applied theme changes.
	fn subscribe(&self, listener: ThemeListener) -> Subscription;

	/// Subscribes a listener that may veto theme changes.
	fn subscribe_vetoable(&self, listener: ThemeVetoListener) -> Subscription;
}

/// Find the closest known theme name, for "did you mean" hints.
pub fn suggest_theme<'a, I>(name: &str, candidates: I) -> Option<&'a str>
where
	I: IntoIterator<Item = &'a str>,
{
	let name = name.to_lowercase();
	let mut best_match = None;
	let mut best_score = 0.0;

	for candidate in candidates {
		let score = strsim::jaro_winkler(&name, &candidate.to_lowercase());
		if score > best_score {
			best_score = score;
			best_match = Some(candidate);
		}
	}

	if best_score > 0.8 { best_match } else { None }
}
