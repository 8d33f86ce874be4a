use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::subscription::{Detach, ListenerId, Subscription};

struct ListenerTable<L: ?Sized> {
	next_id: u64,
	entries: Vec<(ListenerId, Arc<L>)>,
}

impl<L: ?Sized + Send + Sync> Detach for Mutex<ListenerTable<L>> {
	fn detach(&self, id: ListenerId) -> bool {
		let removed = {
			let mut table = self.lock();
			let pos = table.entries.iter().position(|(entry_id, _)| *entry_id == id);
			pos.map(|pos| table.entries.remove(pos))
		};
		// Dropped after unlocking: a listener may own other subscriptions.
		removed.is_some()
	}
}

/// Ordered listener storage shared by properties and routers.
///
/// Notification works on a snapshot so listeners are invoked without the table
/// lock held.
pub(crate) struct ListenerList<L: ?Sized> {
	table: Arc<Mutex<ListenerTable<L>>>,
}

impl<L: ?Sized + Send + Sync + 'static> ListenerList<L> {
	pub fn new() -> Self {
		Self {
			table: Arc::new(Mutex::new(ListenerTable {
				next_id: 0,
				entries: Vec::new(),
			})),
		}
	}

	pub fn add(&self, listener: Arc<L>) -> Subscription {
		let id = {
			let mut table = self.table.lock();
			table.next_id += 1;
			let id = ListenerId::new(table.next_id);
			table.entries.push((id, listener));
			id
		};
		let source: Weak<dyn Detach> = Arc::downgrade(&self.table) as Weak<dyn Detach>;
		Subscription::new(id, source)
	}

	pub fn snapshot(&self) -> Vec<Arc<L>> {
		self.table
			.lock()
			.entries
			.iter()
			.map(|(_, listener)| listener.clone())
			.collect()
	}

	pub fn len(&self) -> usize {
		self.table.lock().entries.len()
	}
}
