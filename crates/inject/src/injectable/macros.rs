/// Implements [`Injectable`](crate::Injectable) for a struct of
/// [`ResourceSlot`](crate::ResourceSlot) fields.
///
/// Each entry is `field: "key"`, optionally followed by positional arguments in
/// brackets and a default after `=`. Prefix the type with `#[theme_aware]` to
/// have instances re-injected on theme and locale changes.
///
/// ```ignore
/// injectable! {
///     #[theme_aware]
///     Dialog {
///         title: "dialog.title",
///         greeting: "dialog.greeting" ["Anna"],
///         width: "dialog.width" = "640",
///     }
/// }
/// ```
#[macro_export]
macro_rules! injectable {
	(@impl $ty:ident, $aware:expr, {
		$($field:ident : $key:literal $([$($arg:literal),* $(,)?])? $(= $default:literal)?),* $(,)?
	}) => {
		impl $crate::Injectable for $ty {
			fn bindings(&self) -> &'static [$crate::Binding] {
				const BINDINGS: &[$crate::Binding] = &[
					$($crate::Binding {
						field: stringify!($field),
						key: $key,
						args: &[$($($arg),*)?],
						default: $crate::__binding_default!($($default)?),
					}),*
				];
				BINDINGS
			}

			fn assign(
				&self,
				field: &str,
				value: &str,
			) -> ::core::result::Result<(), $crate::AssignError> {
				match field {
					$(stringify!($field) => self.$field.assign(value).map_err($crate::AssignError::from),)*
					_ => ::core::result::Result::Err($crate::AssignError::UnknownField(field.to_owned())),
				}
			}

			fn theme_aware(&self) -> bool {
				$aware
			}
		}
	};
	(#[theme_aware] $ty:ident { $($body:tt)* }) => {
		$crate::injectable!(@impl $ty, true, { $($body)* });
	};
	($ty:ident { $($body:tt)* }) => {
		$crate::injectable!(@impl $ty, false, { $($body)* });
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __binding_default {
	() => {
		::core::option::Option::None
	};
	($default:literal) => {
		::core::option::Option::Some($default)
	};
}
