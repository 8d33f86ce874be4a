//! Change notification primitives.
//!
//! Three building blocks shared by the theme registry, the application context
//! and the re-injection engine:
//!
//! - [`Property`] - a named, observable value with vetoable writes
//! - [`EventRouter`] - publish/subscribe for one typed event
//! - [`Subscription`] - RAII token that unsubscribes its listener on drop
//!
//! Listeners always run outside of any internal lock, so a listener may freely
//! subscribe, unsubscribe, read the source or publish further events.

mod listeners;
/// Observable named values with vetoable writes.
pub mod property;
/// Typed publish/subscribe.
pub mod router;
/// Listener handles.
pub mod subscription;

pub use property::{Property, PropertyChange, VetoError};
pub use router::EventRouter;
pub use subscription::{ListenerId, Subscription};
