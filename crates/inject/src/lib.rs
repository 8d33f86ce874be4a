//! Theme- and locale-aware resource injection.
//!
//! Types declare resource [`Binding`]s and implement [`Injectable`] (usually
//! through the [`injectable!`] macro). The [`ResourceInjector`] resolves every
//! binding through a two-step chain, the active theme's resources first and the
//! application defaults second, and assigns the values.
//!
//! Theme-aware instances are remembered in a [`LiveRegistry`] of weak
//! references. Whenever the active theme or the application locale changes,
//! the injector re-runs injection for every instance still alive (a *sweep*).
//! Destroyed instances are dropped from the registry when the application
//! publishes [`InstanceDestroyed`], or lazily once their last owner is gone.
//!
//! ```ignore
//! use tint_inject::{injectable, ResourceInjector, ResourceSlot};
//!
//! #[derive(Default)]
//! struct Header {
//!     title: ResourceSlot<String>,
//! }
//!
//! injectable! {
//!     #[theme_aware]
//!     Header {
//!         title: "header.title",
//!     }
//! }
//!
//! let header = Arc::new(Header::default());
//! injector.inject(&header)?;
//! themes.set_current_theme("light")?; // header.title now follows "light"
//! ```

pub mod binding;
pub mod context;
pub mod error;
pub mod injectable;
pub mod injector;
pub mod registry;

pub use binding::Binding;
pub use context::{
	Application, ApplicationContext, DestroyListener, InstanceDestroyed, LocaleListener,
	PROPERTY_LOCALE,
};
pub use error::{AssignError, InjectError};
pub use injectable::{AsInstance, Injectable, Instance, ResourceSlot};
pub use injector::{ResourceInjector, SweepFailure, SweepReason, SweepReport};
pub use registry::{InstanceId, Iter, LiveRegistry};
pub use tint_config::SweepPolicy;
#[cfg(test)]
use tracing_subscriber as _;
