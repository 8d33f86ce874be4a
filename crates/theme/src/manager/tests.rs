use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use tint_events::VetoError;
use tint_resources::BundleResolver;
use unic_langid::langid;

use super::*;

fn manager() -> DefaultThemeManager {
	DefaultThemeManager::builder()
		.theme(
			"dark",
			BundleResolver::named("dark").with_root_entries([("title", "Dark Title")]),
		)
		.theme_with_aliases(
			"light",
			["day"],
			BundleResolver::named("light").with_root_entries([("title", "Light Title")]),
		)
		.initial("dark")
		.build()
		.unwrap()
}

#[test]
fn test_lists_themes_and_current() {
	let m = manager();
	assert_eq!(
		m.themes().into_iter().collect::<Vec<_>>(),
		vec!["dark".to_string(), "light".to_string()]
	);
	assert_eq!(m.current_theme(), "dark");
}

#[test]
fn test_initial_defaults_to_first_registered() {
	let m = DefaultThemeManager::builder()
		.theme("solarized", BundleResolver::new())
		.theme("amber", BundleResolver::new())
		.build()
		.unwrap();
	assert_eq!(m.current_theme(), "solarized");
}

#[test]
fn test_build_rejects_empty_and_duplicates() {
	assert_eq!(
		DefaultThemeManager::builder().build().unwrap_err(),
		ThemeError::NoThemes
	);
	let err = DefaultThemeManager::builder()
		.theme("dark", BundleResolver::new())
		.theme_with_aliases("night", ["dark"], BundleResolver::new())
		.build()
		.unwrap_err();
	assert_eq!(err, ThemeError::Duplicate("dark".into()));
}

#[test]
fn test_alias_switches_to_canonical_name() {
	let m = manager();
	m.set_current_theme("day").unwrap();
	assert_eq!(m.current_theme(), "light");
}

#[test]
fn test_unknown_theme_suggests_closest() {
	let m = manager();
	let err = m.set_current_theme("ligth").unwrap_err();
	assert_eq!(
		err,
		ThemeError::UnknownTheme {
			name: "ligth".into(),
			suggestion: Some("light".into()),
		}
	);
	assert_eq!(err.to_string(), "theme not found: ligth. Did you mean 'light'?");
	assert_eq!(m.current_theme(), "dark");
}

#[test]
fn test_scoped_resolver_follows_current_theme() {
	let m = manager();
	let resolver = m.resource_resolver();
	let en = langid!("en");

	assert_eq!(resolver.resolve("title", &[], &en).unwrap(), "Dark Title");
	m.set_current_theme("light").unwrap();
	assert_eq!(resolver.resolve("title", &[], &en).unwrap(), "Light Title");
	assert!(resolver.resolve("missing", &[], &en).unwrap_err().is_not_found());
}

#[test]
fn test_change_listener_receives_old_and_new() {
	let m = manager();
	let seen = Arc::new(Mutex::new(Vec::new()));

	let sink = seen.clone();
	let _sub = m.subscribe(Box::new(move |change: &PropertyChange<String>| {
		sink.lock().push(format!("{}: {} -> {}", change.name, change.old, change.new));
	}));

	m.set_current_theme("light").unwrap();
	// Re-selecting the active theme is not a change.
	m.set_current_theme("light").unwrap();

	assert_eq!(*seen.lock(), vec!["currentTheme: dark -> light".to_string()]);
}

#[test]
fn test_veto_blocks_switch() {
	let m = manager();
	let notified = Arc::new(Mutex::new(0));

	let counter = notified.clone();
	let _sub = m.subscribe(Box::new(move |_: &PropertyChange<String>| {
		*counter.lock() += 1
	}));
	let _veto = m.subscribe_vetoable(Box::new(|change: &PropertyChange<String>| {
		Err(VetoError::new(change.name, "theme is locked"))
	}));

	let err = m.set_current_theme("light").unwrap_err();
	assert!(matches!(err, ThemeError::Veto(_)));
	assert_eq!(m.current_theme(), "dark");
	assert_eq!(*notified.lock(), 0);
}

#[test]
fn test_suggest_theme_threshold() {
	let names = ["gruvbox", "nord"];
	assert_eq!(suggest_theme("gruvbx", names), Some("gruvbox"));
	assert_eq!(suggest_theme("zzz", names), None);
}
