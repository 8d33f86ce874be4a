use unic_langid::LanguageIdentifier;

/// Errors raised while resolving a resource value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
	/// The key is not defined for the locale or any of its parents.
	#[error("no resource '{key}' for locale '{locale}'")]
	NotFound {
		key: String,
		locale: LanguageIdentifier,
	},
	/// The resource exists but its template could not be formatted.
	#[error("resource '{key}' is malformed: {source}")]
	Format {
		key: String,
		#[source]
		source: FormatError,
	},
	/// The resolved text could not be converted to the requested type.
	#[error("cannot convert {value:?} to {target}: {reason}")]
	Conversion {
		value: String,
		target: &'static str,
		reason: String,
	},
}

impl ResolveError {
	pub fn not_found(key: impl Into<String>, locale: &LanguageIdentifier) -> Self {
		Self::NotFound {
			key: key.into(),
			locale: locale.clone(),
		}
	}

	/// Returns true for [`ResolveError::NotFound`], the only error a fallback
	/// chain recovers from.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}
}

/// Template formatting failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
	/// A `{` was never closed.
	#[error("unterminated placeholder at byte {offset}")]
	Unterminated { offset: usize },
	/// A lone `}` outside of a placeholder.
	#[error("unmatched '}}' at byte {offset}")]
	UnmatchedBrace { offset: usize },
	/// Placeholder content is not a non-negative integer.
	#[error("invalid placeholder {{{text}}}")]
	InvalidIndex { text: String },
	/// Placeholder refers past the end of the argument list.
	#[error("placeholder {{{index}}} needs {} argument(s), got {provided}", .index + 1)]
	MissingArgument { index: usize, provided: usize },
}
