/// A declared resource-derived slot on an injectable type.
///
/// Bindings are static data: the slot name, the resource key, positional
/// arguments for the template and an optional default. A binding with a
/// default never fails on absence and only consults the active theme's
/// resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
	pub field: &'static str,
	pub key: &'static str,
	pub args: &'static [&'static str],
	pub default: Option<&'static str>,
}

impl Binding {
	pub const fn new(field: &'static str, key: &'static str) -> Self {
		Self {
			field,
			key,
			args: &[],
			default: None,
		}
	}

	pub const fn with_args(mut self, args: &'static [&'static str]) -> Self {
		self.args = args;
		self
	}

	pub const fn with_default(mut self, default: &'static str) -> Self {
		self.default = Some(default);
		self
	}
}
