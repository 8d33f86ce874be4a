use thiserror::Error;
use tint_resources::ResolveError;

/// Injection of one binding failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectError {
	/// Resolving or converting the bound resource failed.
	#[error("cannot inject {type_name}.{field} from '{key}': {source}")]
	Resolve {
		type_name: &'static str,
		field: &'static str,
		key: &'static str,
		#[source]
		source: ResolveError,
	},
	/// A binding names a slot the type does not have.
	#[error("{type_name} has no slot named '{field}'")]
	UnknownField {
		type_name: &'static str,
		field: &'static str,
	},
}

impl InjectError {
	/// Returns true when the resource was missing from every resolver.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::Resolve { source, .. } if source.is_not_found())
	}
}

/// Failure reported by [`crate::Injectable::assign`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
	#[error("no slot named '{0}'")]
	UnknownField(String),
	#[error(transparent)]
	Conversion(#[from] ResolveError),
}
