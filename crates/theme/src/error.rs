use thiserror::Error;
use tint_events::VetoError;

/// Errors raised by theme registries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
	/// The requested theme is not registered.
	#[error("theme not found: {name}{}", suggestion_suffix(.suggestion))]
	UnknownTheme {
		name: String,
		suggestion: Option<String>,
	},
	/// A listener rejected the theme change.
	#[error(transparent)]
	Veto(#[from] VetoError),
	/// A registry was built without any theme.
	#[error("no themes registered")]
	NoThemes,
	/// Two themes or aliases share a name.
	#[error("duplicate theme name: {0}")]
	Duplicate(String),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
	match suggestion {
		Some(s) => format!(". Did you mean '{s}'?"),
		None => String::new(),
	}
}
