use std::sync::Arc;

use parking_lot::RwLock;
use tint_resources::FromResource;

use crate::binding::Binding;
use crate::error::AssignError;

mod macros;

/// Shared handle to an injectable object.
pub type Instance = Arc<dyn Injectable>;

/// An object whose fields are populated from resources.
///
/// Implementations are normally generated by [`crate::injectable!`]. Slots use
/// interior mutability because the injector only ever holds shared handles.
pub trait Injectable: Send + Sync + 'static {
	/// Declared bindings, in injection order.
	fn bindings(&self) -> &'static [Binding];

	/// Converts `value` and stores it in the slot named `field`.
	///
	/// The slot must either take the fully converted value or stay unchanged.
	fn assign(&self, field: &str, value: &str) -> Result<(), AssignError>;

	/// Whether the injector keeps re-applying resources after theme and
	/// locale changes.
	fn theme_aware(&self) -> bool {
		false
	}

	/// Type name used in errors and logs.
	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}

/// Conversion into an [`Instance`], for both concrete and erased handles.
pub trait AsInstance {
	fn to_instance(&self) -> Instance;
}

impl<T: Injectable> AsInstance for Arc<T> {
	fn to_instance(&self) -> Instance {
		self.clone()
	}
}

impl AsInstance for Arc<dyn Injectable> {
	fn to_instance(&self) -> Instance {
		self.clone()
	}
}

/// A field populated by injection.
pub struct ResourceSlot<T> {
	value: RwLock<Option<T>>,
}

impl<T> ResourceSlot<T> {
	pub fn new() -> Self {
		Self {
			value: RwLock::new(None),
		}
	}

	/// Returns a copy of the current value, if injected.
	pub fn get(&self) -> Option<T>
	where
		T: Clone,
	{
		self.value.read().clone()
	}

	/// Runs `f` against the current value without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
		f(self.value.read().as_ref())
	}

	pub fn set(&self, value: T) {
		*self.value.write() = Some(value);
	}

	pub fn is_set(&self) -> bool {
		self.value.read().is_some()
	}

	pub fn clear(&self) {
		*self.value.write() = None;
	}
}

impl<T: FromResource> ResourceSlot<T> {
	/// Converts `raw` and stores it; on conversion failure the slot keeps its
	/// previous value.
	pub fn assign(&self, raw: &str) -> Result<(), tint_resources::ResolveError> {
		let value = T::from_resource(raw)?;
		self.set(value);
		Ok(())
	}
}

impl<T> Default for ResourceSlot<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: std::fmt::Debug> std::fmt::Debug for ResourceSlot<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("ResourceSlot")
			.field(&*self.value.read())
			.finish()
	}
}
