//! Conversion of resolved text into typed values.

use std::path::PathBuf;

use crate::error::ResolveError;


/// A type that can be produced from a resolved resource string.
pub trait FromResource: Sized {
	/// Name used in conversion errors.
	const TARGET: &'static str;

	fn from_resource(value: &str) -> Result<Self, ResolveError>;
}

fn conversion_error(value: &str, target: &'static str, reason: impl ToString) -> ResolveError {
	ResolveError::Conversion {
		value: value.to_owned(),
		target,
		reason: reason.to_string(),
	}
}

impl FromResource for String {
	const TARGET: &'static str = "string";

	fn from_resource(value: &str) -> Result<Self, ResolveError> {
		Ok(value.to_owned())
	}
}

impl FromResource for PathBuf {
	const TARGET: &'static str = "path";

	fn from_resource(value: &str) -> Result<Self, ResolveError> {
		Ok(PathBuf::from(value))
	}
}

impl FromResource for bool {
	const TARGET: &'static str = "bool";

	fn from_resource(value: &str) -> Result<Self, ResolveError> {
		match value.trim().to_ascii_lowercase().as_str() {
			"true" | "yes" | "on" => Ok(true),
			"false" | "no" | "off" => Ok(false),
			_ => Err(conversion_error(
				value,
				Self::TARGET,
				"expected true/false, yes/no or on/off",
			)),
		}
	}
}

impl FromResource for char {
	const TARGET: &'static str = "char";

	fn from_resource(value: &str) -> Result<Self, ResolveError> {
		let mut chars = value.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Ok(c),
			_ => Err(conversion_error(value, Self::TARGET, "expected exactly one character")),
		}
	}
}

macro_rules! impl_from_resource_parse {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromResource for $ty {
				const TARGET: &'static str = stringify!($ty);

				fn from_resource(value: &str) -> Result<Self, ResolveError> {
					value
						.trim()
						.parse::<$ty>()
						.map_err(|e| conversion_error(value, Self::TARGET, e))
				}
			}
		)*
	};
}

impl_from_resource_parse!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
