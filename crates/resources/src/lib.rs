//! Resource resolution.
//!
//! A [`ResourceResolver`] answers `(key, args, locale) -> value`, signalling
//! absence with [`ResolveError::NotFound`]. This crate provides:
//!
//! - [`BundleResolver`] - in-memory bundles with locale fallback
//!   (`de-CH` -> `de` -> root)
//! - [`FallbackResolver`] - a two-step chain that consults its fallback only
//!   when the primary resolver reports absence
//! - [`format_message`] - `{N}` positional argument substitution
//! - [`FromResource`] - conversion of resolved text into typed values

pub mod bundle;
pub mod convert;
pub mod error;
pub mod fallback;
pub mod format;
mod resolver;

pub use bundle::{BundleResolver, locale_chain};
pub use convert::FromResource;
pub use error::{FormatError, ResolveError};
pub use fallback::FallbackResolver;
pub use format::format_message;
pub use resolver::ResourceResolver;
pub use unic_langid::LanguageIdentifier;
