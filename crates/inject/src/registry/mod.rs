//! Weakly held set of live injectable instances.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::injectable::{AsInstance, Injectable, Instance};


/// Insertion-ordered identifier of a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl std::fmt::Display for InstanceId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "instance-{}", self.0)
	}
}

struct Entry {
	id: InstanceId,
	instance: Weak<dyn Injectable>,
}

impl Entry {
	/// Address of the shared allocation. A `Weak` keeps the allocation (not
	/// the value) alive, so no other instance can share it while the entry
	/// exists.
	fn addr(&self) -> *const () {
		self.instance.as_ptr().cast()
	}

	fn is_live(&self) -> bool {
		self.instance.strong_count() > 0
	}

	fn is(&self, addr: *const ()) -> bool {
		std::ptr::eq(self.addr(), addr) && self.is_live()
	}
}

#[derive(Default)]
struct RegistryState {
	next_id: u64,
	/// Sorted by id.
	entries: Vec<Entry>,
}

impl RegistryState {
	/// Drops entries whose instance is gone, returning how many were purged.
	fn purge_stale(&mut self) -> usize {
		let before = self.entries.len();
		self.entries.retain(Entry::is_live);
		before - self.entries.len()
	}
}

fn addr_of(instance: &Instance) -> *const () {
	Arc::as_ptr(instance).cast()
}

/// Registry of instances that opted into re-injection.
///
/// Entries are weak: the registry never keeps an instance alive, and an
/// instance whose last owner is gone is skipped and purged on the next
/// iteration or removal. Membership is by identity (the shared allocation),
/// never by `PartialEq`.
///
/// The state lock is only held for the duration of a single operation or a
/// single iterator step, so instances may be removed while an iteration is in
/// progress, including from code running inside that iteration.
#[derive(Default)]
pub struct LiveRegistry {
	state: Mutex<RegistryState>,
}

impl LiveRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `instance` unless it is already present. Returns true if added.
	///
	/// Stale entries are purged first, so a registry that only ever grows
	/// through `add` stays bounded by its live instances.
	pub fn add(&self, instance: &impl AsInstance) -> bool {
		let instance = instance.to_instance();
		let addr = addr_of(&instance);

		let mut state = self.state.lock();
		let purged = state.purge_stale();
		if state.entries.iter().any(|entry| entry.is(addr)) {
			return false;
		}
		state.next_id += 1;
		let id = InstanceId(state.next_id);
		state.entries.push(Entry {
			id,
			instance: Arc::downgrade(&instance),
		});
		drop(state);

		tracing::trace!(%id, purged, type_name = instance.type_name(), "instance tracked");
		true
	}

	/// Removes `instance` if present. Returns true if an entry was removed.
	///
	/// Stale entries met during the scan are purged as well.
	pub fn remove(&self, instance: &impl AsInstance) -> bool {
		let addr = addr_of(&instance.to_instance());

		let mut state = self.state.lock();
		let before = state.entries.len();
		let mut removed = false;
		state.entries.retain(|entry| {
			if !entry.is_live() {
				return false;
			}
			if std::ptr::eq(entry.addr(), addr) {
				removed = true;
				return false;
			}
			true
		});
		let purged = before - state.entries.len() - usize::from(removed);
		drop(state);

		if purged > 0 {
			tracing::trace!(purged, "purged stale instances during removal");
		}
		removed
	}

	/// Identity membership test. Stale entries never match.
	pub fn contains(&self, instance: &impl AsInstance) -> bool {
		let addr = addr_of(&instance.to_instance());
		self.state.lock().entries.iter().any(|entry| entry.is(addr))
	}

	/// Iterates live instances in insertion order.
	pub fn iter(&self) -> Iter<'_> {
		Iter {
			registry: self,
			cursor: None,
		}
	}

	/// Collects the live instances at this moment.
	pub fn snapshot(&self) -> Vec<Instance> {
		self.iter().collect()
	}

	/// Number of entries, including stale ones not yet purged.
	pub fn len(&self) -> usize {
		self.state.lock().entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Number of entries whose instance is still alive.
	pub fn live_count(&self) -> usize {
		self.state
			.lock()
			.entries
			.iter()
			.filter(|entry| entry.is_live())
			.count()
	}

	/// Drops all stale entries now. Returns how many were purged.
	pub fn purge_stale(&self) -> usize {
		self.state.lock().purge_stale()
	}

	pub fn clear(&self) {
		self.state.lock().entries.clear();
	}
}

impl std::fmt::Debug for LiveRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state.lock();
		f.debug_struct("LiveRegistry")
			.field("entries", &state.entries.len())
			.field("next_id", &state.next_id)
			.finish()
	}
}

impl<'a> IntoIterator for &'a LiveRegistry {
	type Item = Instance;
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Lazy iterator over live instances.
///
/// Each step locks the registry, looks up the first entry after the last one
/// yielded and releases the lock before returning. Entries removed before the
/// iterator reaches them are never yielded; dead entries encountered on the
/// way are purged.
pub struct Iter<'a> {
	registry: &'a LiveRegistry,
	cursor: Option<InstanceId>,
}

impl Iterator for Iter<'_> {
	type Item = Instance;

	fn next(&mut self) -> Option<Instance> {
		let mut state = self.registry.state.lock();
		let idx = match self.cursor {
			Some(cursor) => state.entries.partition_point(|entry| entry.id <= cursor),
			None => 0,
		};

		while idx < state.entries.len() {
			let entry = &state.entries[idx];
			if let Some(instance) = entry.instance.upgrade() {
				self.cursor = Some(entry.id);
				return Some(instance);
			}
			let stale = state.entries.remove(idx);
			tracing::trace!(id = %stale.id, "purged stale instance during iteration");
		}

		self.cursor = state.entries.last().map(|entry| entry.id).or(self.cursor);
		None
	}
}
