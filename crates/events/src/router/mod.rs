use std::sync::Arc;

use crate::listeners::ListenerList;
use crate::subscription::Subscription;


type EventListener<E> = dyn Fn(&E) + Send + Sync;

/// Publish/subscribe channel for a single event type.
///
/// Delivery is synchronous and in subscription order. Listeners subscribed or
/// unsubscribed while an event is being delivered take effect from the next
/// publish.
pub struct EventRouter<E> {
	listeners: ListenerList<EventListener<E>>,
}

impl<E: 'static> EventRouter<E> {
	pub fn new() -> Self {
		Self {
			listeners: ListenerList::new(),
		}
	}

	/// Registers a listener for every subsequently published event.
	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&E) + Send + Sync + 'static,
	{
		self.listeners.add(Arc::new(listener))
	}

	/// Delivers `event` to all listeners and returns how many were called.
	pub fn publish(&self, event: &E) -> usize {
		let listeners = self.listeners.snapshot();
		tracing::trace!(
			event = std::any::type_name::<E>(),
			listeners = listeners.len(),
			"publishing event"
		);
		for listener in &listeners {
			listener(event);
		}
		listeners.len()
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}
}

impl<E: 'static> Default for EventRouter<E> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E> std::fmt::Debug for EventRouter<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventRouter")
			.field("event", &std::any::type_name::<E>())
			.finish_non_exhaustive()
	}
}
