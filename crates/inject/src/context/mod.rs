//! Application-wide context consumed by the injector: the locale, the
//! theme-independent resources and the instance lifecycle.

use std::sync::Arc;

use tint_config::Config;
use tint_events::{EventRouter, Property, PropertyChange, Subscription, VetoError};
use tint_resources::{LanguageIdentifier, ResourceResolver};

use crate::injectable::{AsInstance, Instance};


/// Name of the property carried by locale change notifications.
pub const PROPERTY_LOCALE: &str = "locale";

/// Listener for applied locale changes.
pub type LocaleListener = Box<dyn Fn(&PropertyChange<LanguageIdentifier>) + Send + Sync>;
/// Listener for instance destruction.
pub type DestroyListener = Box<dyn Fn(&InstanceDestroyed) + Send + Sync>;

/// Published when the application disposes of an instance.
#[derive(Clone)]
pub struct InstanceDestroyed {
	instance: Instance,
}

impl InstanceDestroyed {
	pub fn new(instance: &impl AsInstance) -> Self {
		Self {
			instance: instance.to_instance(),
		}
	}

	pub fn instance(&self) -> &Instance {
		&self.instance
	}
}

impl std::fmt::Debug for InstanceDestroyed {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("InstanceDestroyed")
			.field("type_name", &self.instance.type_name())
			.field("instance", &Arc::as_ptr(&self.instance).cast::<()>())
			.finish()
	}
}

/// The hosting application, as seen by the injector.
pub trait ApplicationContext: Send + Sync {
	/// Locale used for every resolution.
	fn locale(&self) -> LanguageIdentifier;

	/// Theme-independent resources, consulted when the active theme does not
	/// define a key.
	fn resource_resolver(&self) -> Arc<dyn ResourceResolver>;

	/// Subscribes to applied locale changes.
	fn subscribe_locale(&self, listener: LocaleListener) -> Subscription;

	/// Subscribes to instance destruction.
	fn subscribe_destroyed(&self, listener: DestroyListener) -> Subscription;
}

/// Default [`ApplicationContext`].
pub struct Application {
	locale: Property<LanguageIdentifier>,
	resolver: Arc<dyn ResourceResolver>,
	destroyed: EventRouter<InstanceDestroyed>,
}

impl Application {
	pub fn new(locale: LanguageIdentifier, resolver: impl ResourceResolver + 'static) -> Self {
		Self {
			locale: Property::new(PROPERTY_LOCALE, locale),
			resolver: Arc::new(resolver),
			destroyed: EventRouter::new(),
		}
	}

	/// Creates an application starting in the configured locale.
	pub fn from_config(config: &Config, resolver: impl ResourceResolver + 'static) -> Self {
		Self::new(config.locale_or_default(), resolver)
	}

	/// Changes the application locale.
	///
	/// Returns `Ok(false)` when `locale` is already active. Locale listeners
	/// may veto the change.
	pub fn set_locale(&self, locale: LanguageIdentifier) -> Result<bool, VetoError> {
		let changed = self.locale.set(locale)?;
		if changed {
			tracing::debug!(locale = %self.locale.get(), "application locale set");
		}
		Ok(changed)
	}

	/// The locale property, for vetoable subscriptions.
	pub fn locale_property(&self) -> &Property<LanguageIdentifier> {
		&self.locale
	}

	/// Announces that `instance` is being disposed of. Returns how many
	/// listeners were notified.
	pub fn destroy(&self, instance: &impl AsInstance) -> usize {
		let event = InstanceDestroyed::new(instance);
		tracing::trace!(type_name = event.instance.type_name(), "instance destroyed");
		self.destroyed.publish(&event)
	}
}

impl ApplicationContext for Application {
	fn locale(&self) -> LanguageIdentifier {
		LanguageIdentifier::clone(&self.locale.get())
	}

	fn resource_resolver(&self) -> Arc<dyn ResourceResolver> {
		self.resolver.clone()
	}

	fn subscribe_locale(&self, listener: LocaleListener) -> Subscription {
		self.locale.subscribe(listener)
	}

	fn subscribe_destroyed(&self, listener: DestroyListener) -> Subscription {
		self.destroyed.subscribe(listener)
	}
}

impl std::fmt::Debug for Application {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Application")
			.field("locale", &self.locale.get())
			.field("destroy_listeners", &self.destroyed.listener_count())
			.finish_non_exhaustive()
	}
}
