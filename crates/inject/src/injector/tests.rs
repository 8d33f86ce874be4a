use std::sync::Arc;

use pretty_assertions::assert_eq;
use tint_config::Config;
use tint_resources::BundleResolver;
use tint_theme::DefaultThemeManager;
use unic_langid::langid;

use super::*;
use crate::binding::Binding;
use crate::context::Application;
use crate::injectable::ResourceSlot;

#[derive(Default)]
struct Panel {
	title: ResourceSlot<String>,
	footer: ResourceSlot<String>,
	padding: ResourceSlot<u16>,
}

crate::injectable! {
	#[theme_aware]
	Panel {
		title: "panel.title",
		footer: "panel.footer" ["2026"],
		padding: "panel.padding" = "4",
	}
}

#[derive(Default)]
struct Tooltip {
	text: ResourceSlot<String>,
}

crate::injectable! {
	Tooltip {
		text: "panel.title",
	}
}

/// Declares a binding for a slot it does not have.
struct Misbound;

impl Injectable for Misbound {
	fn bindings(&self) -> &'static [Binding] {
		const BINDINGS: &[Binding] = &[Binding::new("ghost", "panel.title")];
		BINDINGS
	}

	fn assign(&self, field: &str, _: &str) -> Result<(), AssignError> {
		Err(AssignError::UnknownField(field.to_owned()))
	}
}

fn fixture() -> (Arc<DefaultThemeManager>, Arc<Application>) {
	let themes = DefaultThemeManager::builder()
		.theme(
			"dark",
			BundleResolver::named("dark").with_root_entries([
				("panel.title", "Dark"),
				("panel.padding", "8"),
			]),
		)
		.theme(
			"light",
			BundleResolver::named("light").with_root_entries([("panel.title", "Light")]),
		)
		.initial("dark")
		.build()
		.unwrap();
	let app = Application::new(
		langid!("en"),
		BundleResolver::named("app")
			.with_root_entries([
				("panel.title", "Plain"),
				("panel.footer", "(c) {0}"),
				("panel.padding", "2"),
			])
			.with_entry(langid!("de"), "panel.footer", "© {0}"),
	);
	(Arc::new(themes), Arc::new(app))
}

#[test]
fn test_inject_resolves_theme_then_defaults() {
	let (themes, app) = fixture();
	let injector = ResourceInjector::new(themes, app);
	let panel = Arc::new(Panel::default());

	injector.inject(&panel).unwrap();

	assert_eq!(panel.title.get().as_deref(), Some("Dark"));
	assert_eq!(panel.footer.get().as_deref(), Some("(c) 2026"));
	assert_eq!(panel.padding.get(), Some(8));
}

#[test]
fn test_default_binding_consults_theme_only() {
	let (themes, app) = fixture();
	themes.set_current_theme("light").unwrap();
	let injector = ResourceInjector::new(themes, app);
	let panel = Arc::new(Panel::default());

	injector.inject(&panel).unwrap();

	// "light" has no padding; the binding default wins over the app's "2".
	assert_eq!(panel.padding.get(), Some(4));
}

#[test]
fn test_theme_aware_instances_are_tracked_once() {
	let (themes, app) = fixture();
	let injector = ResourceInjector::new(themes, app);
	let panel = Arc::new(Panel::default());
	let tooltip = Arc::new(Tooltip::default());

	injector.inject(&panel).unwrap();
	injector.inject(&panel).unwrap();
	injector.inject(&tooltip).unwrap();

	assert_eq!(tooltip.text.get().as_deref(), Some("Dark"));
	assert_eq!(injector.tracked(), 1);
	assert!(injector.registry().contains(&panel));
	assert!(!injector.registry().contains(&tooltip));
}

#[test]
fn test_unknown_field_is_reported() {
	let (themes, app) = fixture();
	let injector = ResourceInjector::new(themes, app);

	let err = injector.inject(&Arc::new(Misbound)).unwrap_err();
	assert_eq!(
		err,
		InjectError::UnknownField {
			type_name: std::any::type_name::<Misbound>(),
			field: "ghost",
		}
	);
}

#[test]
fn test_conversion_failure_keeps_slot_and_skips_tracking() {
	let (_, app) = fixture();
	let broken = DefaultThemeManager::builder()
		.theme(
			"broken",
			BundleResolver::new().with_root_entries([("panel.padding", "wide")]),
		)
		.build()
		.unwrap();
	let injector = ResourceInjector::new(Arc::new(broken), app);
	let panel = Arc::new(Panel::default());
	panel.padding.set(1);

	let err = injector.inject(&panel).unwrap_err();
	assert!(matches!(
		err,
		InjectError::Resolve {
			field: "padding",
			source: ResolveError::Conversion { target: "u16", .. },
			..
		}
	));
	// Bindings before the failing one were applied.
	assert_eq!(panel.title.get().as_deref(), Some("Plain"));
	assert_eq!(panel.padding.get(), Some(1));
	assert_eq!(injector.tracked(), 0);
}

#[test]
fn test_manual_sweep_reports() {
	let (themes, app) = fixture();
	let injector = ResourceInjector::new(themes.clone(), app);
	let panel = Arc::new(Panel::default());
	injector.inject(&panel).unwrap();

	let report = injector.sweep();
	assert_eq!(report.reason, SweepReason::Manual);
	assert_eq!((report.visited, report.injected), (1, 1));
	assert!(report.is_clean());
	assert!(!report.aborted);
}

#[test]
fn test_sweep_skips_dropped_instances() {
	let (themes, app) = fixture();
	let injector = ResourceInjector::new(themes, app);
	let kept = Arc::new(Panel::default());
	let dropped = Arc::new(Panel::default());
	injector.inject(&kept).unwrap();
	injector.inject(&dropped).unwrap();
	drop(dropped);

	let report = injector.reinject_all();
	assert_eq!(report.visited, 1);
	assert_eq!(injector.registry().len(), 1);
}

#[test]
fn test_resolve_helpers() {
	let (themes, app) = fixture();
	let injector = ResourceInjector::new(themes, app.clone());

	assert_eq!(injector.resolve("panel.title", &[]).unwrap(), "Dark");
	assert_eq!(injector.resolve("panel.footer", &["1999"]).unwrap(), "(c) 1999");
	assert!(injector.resolve("panel.missing", &[]).unwrap_err().is_not_found());
	assert_eq!(
		injector.resolve_or("panel.footer", &["1999"], "none").unwrap(),
		"none"
	);

	app.set_locale(langid!("de-DE")).unwrap();
	assert_eq!(injector.resolve("panel.footer", &["1999"]).unwrap(), "© 1999");
}

#[test]
fn test_direct_notification_handlers() {
	let (themes, app) = fixture();
	let injector = ResourceInjector::new(themes.clone(), app);
	let panel = Arc::new(Panel::default());
	injector.inject(&panel).unwrap();
	injector.dispose();

	themes.set_current_theme("light").unwrap();
	assert_eq!(panel.title.get().as_deref(), Some("Dark"));

	let change = PropertyChange {
		name: tint_theme::PROPERTY_CURRENT_THEME,
		old: Arc::new("dark".to_string()),
		new: Arc::new("light".to_string()),
	};
	let report = injector.on_theme_changed(&change);
	assert_eq!(report.reason, SweepReason::ThemeChanged);
	assert_eq!(panel.title.get().as_deref(), Some("Light"));

	assert!(injector.on_instance_destroyed(&InstanceDestroyed::new(&panel)));
	assert!(!injector.on_instance_destroyed(&InstanceDestroyed::new(&panel)));
	assert_eq!(injector.tracked(), 0);
}

#[test]
fn test_dispose_is_idempotent() {
	let (themes, app) = fixture();
	let injector = ResourceInjector::new(themes.clone(), app.clone());
	assert!(!injector.is_disposed());

	injector.dispose();
	injector.dispose();

	assert!(injector.is_disposed());
	assert_eq!(themes.current_property().listener_count(), 0);
	assert_eq!(app.locale_property().listener_count(), 0);
}

#[test]
fn test_dropping_injector_unsubscribes() {
	let (themes, app) = fixture();
	let injector = ResourceInjector::new(themes.clone(), app.clone());
	assert_eq!(themes.current_property().listener_count(), 1);

	drop(injector);
	assert_eq!(themes.current_property().listener_count(), 0);
	themes.set_current_theme("light").unwrap();
}

#[test]
fn test_from_config_applies_theme_and_policy() {
	let (themes, app) = fixture();
	let config = Config::parse(
		r#"
[theme]
default = "light"

[injection]
sweep-policy = "abort"
"#,
	)
	.unwrap();

	let injector = ResourceInjector::from_config(themes.clone(), app, &config).unwrap();
	assert_eq!(themes.current_theme(), "light");
	assert_eq!(injector.policy(), SweepPolicy::Abort);
}

#[test]
fn test_from_config_unknown_theme() {
	let (themes, app) = fixture();
	let config = Config::parse("[theme]\ndefault = \"lite\"\n").unwrap();

	let err = ResourceInjector::from_config(themes.clone(), app, &config).unwrap_err();
	assert!(matches!(err, ThemeError::UnknownTheme { .. }));
	assert_eq!(themes.current_theme(), "dark");
}
