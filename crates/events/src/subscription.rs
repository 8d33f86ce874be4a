use std::sync::Weak;

/// Identifier of a registered listener, unique within its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
	pub(crate) const fn new(id: u64) -> Self {
		Self(id)
	}

	/// Returns the raw numeric id.
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl std::fmt::Display for ListenerId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "listener-{}", self.0)
	}
}

/// Removes a listener from the source that issued a [`Subscription`].
pub(crate) trait Detach: Send + Sync {
	fn detach(&self, id: ListenerId) -> bool;
}

/// Cancellation token for a registered listener.
///
/// Dropping the token unsubscribes the listener. The token only holds a weak
/// handle to its source, so it never keeps a property or router alive.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
	id: ListenerId,
	source: Option<Weak<dyn Detach>>,
}

impl Subscription {
	pub(crate) fn new(id: ListenerId, source: Weak<dyn Detach>) -> Self {
		Self {
			id,
			source: Some(source),
		}
	}

	/// Returns the id of the subscribed listener.
	pub fn id(&self) -> ListenerId {
		self.id
	}

	/// Returns true while the source that issued this token still exists.
	pub fn is_active(&self) -> bool {
		self.source
			.as_ref()
			.is_some_and(|source| source.strong_count() > 0)
	}

	/// Unsubscribes now. Equivalent to dropping the token.
	pub fn unsubscribe(self) {}

	/// Keeps the listener registered for the whole lifetime of its source.
	pub fn detach(mut self) {
		self.source = None;
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(source) = self.source.take().and_then(|weak| weak.upgrade()) {
			source.detach(self.id);
		}
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription")
			.field("id", &self.id)
			.field("active", &self.is_active())
			.finish()
	}
}
