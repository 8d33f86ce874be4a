//! Theme registry.
//!
//! A [`ThemeManager`] knows the available themes, which one is active, and how
//! to resolve resources scoped to the active theme. Switching themes is
//! vetoable and observable through [`tint_events::Property`] semantics.

mod error;
pub mod manager;

pub use error::ThemeError;
pub use manager::{
	DefaultThemeManager, PROPERTY_CURRENT_THEME, ThemeListener, ThemeManager, ThemeManagerBuilder,
	ThemeVetoListener, suggest_theme,
};
