//! Shared fixtures for re-injection tests.

use std::sync::Arc;

use tint_inject::{Application, ResourceInjector, ResourceSlot, SweepPolicy, injectable};
use tint_resources::BundleResolver;
use tint_theme::DefaultThemeManager;
use unic_langid::langid;

#[derive(Default)]
pub struct Window {
	pub title: ResourceSlot<String>,
	pub greeting: ResourceSlot<String>,
}

injectable! {
	#[theme_aware]
	Window {
		title: "window.title",
		greeting: "window.greeting" ["Ada"],
	}
}

/// Same bindings as [`Window`], but injected only once.
#[derive(Default)]
pub struct StaticWindow {
	pub title: ResourceSlot<String>,
}

injectable! {
	StaticWindow {
		title: "window.title",
	}
}

#[derive(Default)]
pub struct Gauge {
	pub size: ResourceSlot<u32>,
}

injectable! {
	#[theme_aware]
	Gauge {
		size: "gauge.size",
	}
}

pub struct Fixture {
	pub themes: Arc<DefaultThemeManager>,
	pub app: Arc<Application>,
	pub injector: ResourceInjector,
}

/// Themes "dark" and "light" over an application bundle in English and
/// German.
pub fn fixture(policy: SweepPolicy) -> Fixture {
	let _ = tracing_subscriber::fmt::try_init();

	let themes = DefaultThemeManager::builder()
		.theme(
			"dark",
			BundleResolver::named("dark").with_root_entries([
				("window.title", "Dark Title"),
				("gauge.size", "12"),
			]),
		)
		.theme(
			"light",
			BundleResolver::named("light").with_root_entries([
				("window.title", "Light Title"),
				("gauge.size", "huge"),
			]),
		)
		.initial("dark")
		.build()
		.unwrap();
	let app = Application::new(
		langid!("en-US"),
		BundleResolver::named("app")
			.with_entries(langid!("en"), [
				("window.greeting", "Hello, {0}"),
				("window.farewell", "Bye"),
			])
			.with_entry(langid!("de"), "window.greeting", "Hallo, {0}"),
	);

	let themes = Arc::new(themes);
	let app = Arc::new(app);
	let injector = ResourceInjector::with_policy(themes.clone(), app.clone(), policy);
	Fixture {
		themes,
		app,
		injector,
	}
}
