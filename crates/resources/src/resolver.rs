use std::sync::Arc;

use unic_langid::LanguageIdentifier;

use crate::error::ResolveError;

/// Resolves resource keys to formatted values for a locale.
pub trait ResourceResolver: Send + Sync {
	/// Resolves `key`, substituting `args` into `{N}` placeholders.
	fn resolve(
		&self,
		key: &str,
		args: &[&str],
		locale: &LanguageIdentifier,
	) -> Result<String, ResolveError>;

	/// Resolves `key`, answering `default` when it is absent.
	///
	/// Absence is never an error here; malformed templates still are.
	fn resolve_or(
		&self,
		key: &str,
		args: &[&str],
		locale: &LanguageIdentifier,
		default: &str,
	) -> Result<String, ResolveError> {
		match self.resolve(key, args, locale) {
			Err(err) if err.is_not_found() => Ok(default.to_owned()),
			other => other,
		}
	}
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for Arc<R> {
	fn resolve(
		&self,
		key: &str,
		args: &[&str],
		locale: &LanguageIdentifier,
	) -> Result<String, ResolveError> {
		(**self).resolve(key, args, locale)
	}

	fn resolve_or(
		&self,
		key: &str,
		args: &[&str],
		locale: &LanguageIdentifier,
		default: &str,
	) -> Result<String, ResolveError> {
		(**self).resolve_or(key, args, locale, default)
	}
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for Box<R> {
	fn resolve(
		&self,
		key: &str,
		args: &[&str],
		locale: &LanguageIdentifier,
	) -> Result<String, ResolveError> {
		(**self).resolve(key, args, locale)
	}

	fn resolve_or(
		&self,
		key: &str,
		args: &[&str],
		locale: &LanguageIdentifier,
		default: &str,
	) -> Result<String, ResolveError> {
		(**self).resolve_or(key, args, locale, default)
	}
}
