use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::listeners::ListenerList;
use crate::subscription::Subscription;

#[cfg(test)]
mod tests;

/// A pending or applied change to a [`Property`].
#[derive(Debug)]
pub struct PropertyChange<T> {
	/// Name of the property that changed.
	pub name: &'static str,
	/// Value before the change.
	pub old: Arc<T>,
	/// Value after the change.
	pub new: Arc<T>,
}

impl<T> Clone for PropertyChange<T> {
	fn clone(&self) -> Self {
		Self {
			name: self.name,
			old: self.old.clone(),
			new: self.new.clone(),
		}
	}
}

/// A vetoable listener rejected a property change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("change of '{property}' vetoed: {reason}")]
pub struct VetoError {
	/// Name of the property whose change was rejected.
	pub property: String,
	/// Human readable rejection reason.
	pub reason: String,
}

impl VetoError {
	pub fn new(property: impl Into<String>, reason: impl Into<String>) -> Self {
		Self {
			property: property.into(),
			reason: reason.into(),
		}
	}
}

type ChangeListener<T> = dyn Fn(&PropertyChange<T>) + Send + Sync;
type VetoListener<T> = dyn Fn(&PropertyChange<T>) -> Result<(), VetoError> + Send + Sync;

/// A named observable value.
///
/// Reads are lock-free. Writes are serialized: vetoable listeners are consulted
/// first and any of them can reject the change, then the value is stored and
/// change listeners are notified with the old and new values. Writing a value
/// equal to the current one is a no-op and notifies nobody.
///
/// Vetoable listeners run while the write is in progress and must not write
/// the same property.
pub struct Property<T> {
	name: &'static str,
	value: ArcSwap<T>,
	write: Mutex<()>,
	listeners: ListenerList<ChangeListener<T>>,
	vetoers: ListenerList<VetoListener<T>>,
}

impl<T> Property<T>
where
	T: PartialEq + Send + Sync + 'static,
{
	/// Creates a property holding `initial`.
	pub fn new(name: &'static str, initial: T) -> Self {
		Self {
			name,
			value: ArcSwap::from_pointee(initial),
			write: Mutex::new(()),
			listeners: ListenerList::new(),
			vetoers: ListenerList::new(),
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the current value.
	pub fn get(&self) -> Arc<T> {
		self.value.load_full()
	}

	/// Writes a new value.
	///
	/// Returns `Ok(true)` if the value changed, `Ok(false)` if it was equal to
	/// the current value. A veto leaves the value untouched and no change
	/// listener is called.
	pub fn set(&self, value: T) -> Result<bool, VetoError> {
		let change = {
			let _guard = self.write.lock();
			let old = self.value.load_full();
			if *old == value {
				return Ok(false);
			}
			let change = PropertyChange {
				name: self.name,
				old,
				new: Arc::new(value),
			};
			for vetoer in self.vetoers.snapshot() {
				if let Err(veto) = vetoer(&change) {
					tracing::debug!(property = self.name, reason = %veto.reason, "property change vetoed");
					return Err(veto);
				}
			}
			self.value.store(change.new.clone());
			change
		};

		for listener in self.listeners.snapshot() {
			listener(&change);
		}
		Ok(true)
	}

	/// Registers a listener called after every applied change.
	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&PropertyChange<T>) + Send + Sync + 'static,
	{
		self.listeners.add(Arc::new(listener))
	}

	/// Registers a listener that may reject changes before they are applied.
	pub fn subscribe_vetoable<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&PropertyChange<T>) -> Result<(), VetoError> + Send + Sync + 'static,
	{
		self.vetoers.add(Arc::new(listener))
	}

	/// Number of registered change listeners.
	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}
}

impl<T: std::fmt::Debug> std::fmt::Debug for Property<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Property")
			.field("name", &self.name)
			.field("value", &self.value.load())
			.finish_non_exhaustive()
	}
}
