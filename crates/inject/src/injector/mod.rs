//! The re-injection engine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tint_config::{Config, SweepPolicy};
use tint_events::{PropertyChange, Subscription};
use tint_resources::{FallbackResolver, LanguageIdentifier, ResolveError, ResourceResolver};
use tint_theme::{ThemeError, ThemeManager};

use crate::binding::Binding;
use crate::context::{ApplicationContext, InstanceDestroyed};
use crate::error::{AssignError, InjectError};
use crate::injectable::{AsInstance, Injectable};
use crate::registry::LiveRegistry;

mod report;
#[cfg(test)]
mod tests;

pub use report::{SweepFailure, SweepReason, SweepReport};

type ChainResolver = FallbackResolver<Arc<dyn ResourceResolver>, Arc<dyn ResourceResolver>>;

/// State shared between the injector and its notification listeners.
///
/// Listeners only hold a [`Weak`] reference, so the theme manager and the
/// application never keep a dropped injector alive.
struct InjectorCore {
	themes: Arc<dyn ThemeManager>,
	app: Arc<dyn ApplicationContext>,
	registry: LiveRegistry,
	policy: SweepPolicy,
}

impl InjectorCore {
	/// The theme-scoped resources first, the application defaults second.
	fn resolver(&self) -> ChainResolver {
		FallbackResolver::new(self.themes.resource_resolver(), self.app.resource_resolver())
	}

	/// Resolves and assigns every binding of `instance`, stopping at the first
	/// failure.
	fn apply(
		&self,
		instance: &dyn Injectable,
		resolver: &ChainResolver,
		locale: &LanguageIdentifier,
	) -> Result<(), InjectError> {
		for binding in instance.bindings() {
			apply_binding(instance, binding, resolver, locale)?;
		}
		Ok(())
	}

	fn sweep(&self, reason: SweepReason) -> SweepReport {
		let resolver = self.resolver();
		let locale = self.app.locale();
		let mut report = SweepReport::new(reason);

		for instance in &self.registry {
			report.visited += 1;
			match self.apply(&*instance, &resolver, &locale) {
				Ok(()) => report.injected += 1,
				Err(error) => {
					tracing::warn!(
						%reason,
						type_name = instance.type_name(),
						%error,
						"re-injection failed"
					);
					report.failures.push(SweepFailure {
						type_name: instance.type_name(),
						error,
					});
					if self.policy == SweepPolicy::Abort {
						report.aborted = true;
						break;
					}
				}
			}
		}

		tracing::debug!(
			%reason,
			%locale,
			visited = report.visited,
			injected = report.injected,
			failed = report.failures.len(),
			aborted = report.aborted,
			"sweep finished"
		);
		report
	}

	fn on_theme_changed(&self, change: &PropertyChange<String>) -> SweepReport {
		tracing::info!(theme = %change.new, previous = %change.old, "theme changed");
		self.sweep(SweepReason::ThemeChanged)
	}

	fn on_locale_changed(&self, change: &PropertyChange<LanguageIdentifier>) -> SweepReport {
		tracing::debug!(locale = %change.new, previous = %change.old, "locale changed");
		self.sweep(SweepReason::LocaleChanged)
	}

	fn on_instance_destroyed(&self, event: &InstanceDestroyed) -> bool {
		let removed = self.registry.remove(event.instance());
		if removed {
			tracing::trace!(
				type_name = event.instance().type_name(),
				"stopped tracking destroyed instance"
			);
		}
		removed
	}
}

fn apply_binding(
	instance: &dyn Injectable,
	binding: &Binding,
	resolver: &ChainResolver,
	locale: &LanguageIdentifier,
) -> Result<(), InjectError> {
	let type_name = instance.type_name();
	let resolve_error = |source: ResolveError| InjectError::Resolve {
		type_name,
		field: binding.field,
		key: binding.key,
		source,
	};

	let value = match binding.default {
		Some(default) => resolver.resolve_or(binding.key, binding.args, locale, default),
		None => resolver.resolve(binding.key, binding.args, locale),
	}
	.map_err(resolve_error)?;

	instance
		.assign(binding.field, &value)
		.map_err(|err| match err {
			AssignError::UnknownField(_) => InjectError::UnknownField {
				type_name,
				field: binding.field,
			},
			AssignError::Conversion(source) => resolve_error(source),
		})
}

/// Populates resource bindings and keeps theme-aware instances up to date.
///
/// On construction the injector subscribes to theme changes, locale changes
/// and instance destruction. Every theme or locale change re-injects all
/// tracked instances that are still alive; destroyed instances stop being
/// tracked. [`dispose`](Self::dispose), or dropping the injector, cancels the
/// subscriptions.
pub struct ResourceInjector {
	core: Arc<InjectorCore>,
	subscriptions: Mutex<Vec<Subscription>>,
	disposed: AtomicBool,
}

impl ResourceInjector {
	/// Creates an injector with [`SweepPolicy::Isolate`].
	pub fn new(themes: Arc<dyn ThemeManager>, app: Arc<dyn ApplicationContext>) -> Self {
		Self::with_policy(themes, app, SweepPolicy::default())
	}

	pub fn with_policy(
		themes: Arc<dyn ThemeManager>,
		app: Arc<dyn ApplicationContext>,
		policy: SweepPolicy,
	) -> Self {
		let core = Arc::new(InjectorCore {
			themes,
			app,
			registry: LiveRegistry::new(),
			policy,
		});
		let subscriptions = subscribe(&core);
		tracing::debug!(?policy, "resource injector ready");

		Self {
			core,
			subscriptions: Mutex::new(subscriptions),
			disposed: AtomicBool::new(false),
		}
	}

	/// Creates an injector from configuration, activating the configured
	/// theme first.
	pub fn from_config(
		themes: Arc<dyn ThemeManager>,
		app: Arc<dyn ApplicationContext>,
		config: &Config,
	) -> Result<Self, ThemeError> {
		if let Some(theme) = &config.theme {
			themes.set_current_theme(theme)?;
		}
		Ok(Self::with_policy(themes, app, config.sweep_policy_or_default()))
	}

	/// Populates every binding of `instance`.
	///
	/// Stops at the first failing binding; bindings assigned before it keep
	/// their new values. Theme-aware instances are tracked for re-injection
	/// once injection succeeds.
	pub fn inject(&self, instance: &impl AsInstance) -> Result<(), InjectError> {
		let instance = instance.to_instance();
		let resolver = self.core.resolver();
		let locale = self.core.app.locale();
		self.core.apply(&*instance, &resolver, &locale)?;

		if instance.theme_aware() {
			self.core.registry.add(&instance);
		}
		Ok(())
	}

	/// Re-injects every tracked instance now.
	pub fn sweep(&self) -> SweepReport {
		self.core.sweep(SweepReason::Manual)
	}

	/// Alias of [`sweep`](Self::sweep).
	pub fn reinject_all(&self) -> SweepReport {
		self.sweep()
	}

	/// Resolves `key` against the active theme, then the application
	/// defaults, in the current locale.
	pub fn resolve(&self, key: &str, args: &[&str]) -> Result<String, ResolveError> {
		self.core
			.resolver()
			.resolve(key, args, &self.core.app.locale())
	}

	/// Resolves `key` against the active theme only, answering `default` when
	/// it is absent.
	pub fn resolve_or(&self, key: &str, args: &[&str], default: &str) -> Result<String, ResolveError> {
		self.core
			.resolver()
			.resolve_or(key, args, &self.core.app.locale(), default)
	}

	/// Handles an applied theme change by sweeping.
	pub fn on_theme_changed(&self, change: &PropertyChange<String>) -> SweepReport {
		self.core.on_theme_changed(change)
	}

	/// Handles an applied locale change by sweeping.
	pub fn on_locale_changed(&self, change: &PropertyChange<LanguageIdentifier>) -> SweepReport {
		self.core.on_locale_changed(change)
	}

	/// Stops tracking the destroyed instance. Returns true if it was tracked.
	pub fn on_instance_destroyed(&self, event: &InstanceDestroyed) -> bool {
		self.core.on_instance_destroyed(event)
	}

	pub fn registry(&self) -> &LiveRegistry {
		&self.core.registry
	}

	/// Number of tracked instances still alive.
	pub fn tracked(&self) -> usize {
		self.core.registry.live_count()
	}

	pub fn policy(&self) -> SweepPolicy {
		self.core.policy
	}

	/// Cancels all subscriptions. Later theme and locale changes no longer
	/// sweep; [`inject`](Self::inject) keeps working.
	pub fn dispose(&self) {
		if self.disposed.swap(true, Ordering::AcqRel) {
			return;
		}
		let subscriptions = std::mem::take(&mut *self.subscriptions.lock());
		drop(subscriptions);
		tracing::debug!(tracked = self.tracked(), "resource injector disposed");
	}

	pub fn is_disposed(&self) -> bool {
		self.disposed.load(Ordering::Acquire)
	}
}

impl std::fmt::Debug for ResourceInjector {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ResourceInjector")
			.field("policy", &self.core.policy)
			.field("registry", &self.core.registry)
			.field("disposed", &self.is_disposed())
			.finish_non_exhaustive()
	}
}

fn subscribe(core: &Arc<InjectorCore>) -> Vec<Subscription> {
	let weak = Arc::downgrade(core);
	let theme = core.themes.subscribe(Box::new({
		let weak = weak.clone();
		move |change: &PropertyChange<String>| {
			if let Some(core) = Weak::upgrade(&weak) {
				core.on_theme_changed(change);
			}
		}
	}));
	let locale = core.app.subscribe_locale(Box::new({
		let weak = weak.clone();
		move |change: &PropertyChange<LanguageIdentifier>| {
			if let Some(core) = Weak::upgrade(&weak) {
				core.on_locale_changed(change);
			}
		}
	}));
	let destroyed = core
		.app
		.subscribe_destroyed(Box::new(move |event: &InstanceDestroyed| {
			if let Some(core) = Weak::upgrade(&weak) {
				core.on_instance_destroyed(event);
			}
		}));
	vec![theme, locale, destroyed]
}
