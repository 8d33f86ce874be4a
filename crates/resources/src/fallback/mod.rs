//! Two-step resolver chain.
//!
//! Themes override a subset of resources and inherit the rest from the base
//! set. Only absence falls through: a malformed template or a conversion
//! failure in the primary resolver is reported as-is.

use unic_langid::LanguageIdentifier;

use crate::error::ResolveError;
use crate::resolver::ResourceResolver;


/// Consults `primary`, then `fallback` when `primary` reports
/// [`ResolveError::NotFound`].
///
/// The default-value variant ([`ResourceResolver::resolve_or`]) consults only
/// the primary resolver: supplying a default already absorbs absence.
#[derive(Debug, Clone)]
pub struct FallbackResolver<P, F> {
	primary: P,
	fallback: F,
}

impl<P, F> FallbackResolver<P, F> {
	pub fn new(primary: P, fallback: F) -> Self {
		Self { primary, fallback }
	}

	pub fn primary(&self) -> &P {
		&self.primary
	}

	pub fn fallback(&self) -> &F {
		&self.fallback
	}
}

impl<P, F> ResourceResolver for FallbackResolver<P, F>
where
	P: ResourceResolver,
	F: ResourceResolver,
{
	fn resolve(
		&self,
		key: &str,
		args: &[&str],
		locale: &LanguageIdentifier,
	) -> Result<String, ResolveError> {
		match self.primary.resolve(key, args, locale) {
			Err(err) if err.is_not_found() => {
				tracing::trace!(key, %locale, "falling back to default resources");
				self.fallback.resolve(key, args, locale)
			}
			resolved => resolved,
		}
	}

	fn resolve_or(
		&self,
		key: &str,
		args: &[&str],
		locale: &LanguageIdentifier,
		default: &str,
	) -> Result<String, ResolveError> {
		self.primary.resolve_or(key, args, locale, default)
	}
}
