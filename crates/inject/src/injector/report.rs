use crate::error::InjectError;

/// What triggered a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepReason {
	ThemeChanged,
	LocaleChanged,
	/// [`ResourceInjector::sweep`](super::ResourceInjector::sweep).
	Manual,
}

impl std::fmt::Display for SweepReason {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Self::ThemeChanged => "theme-changed",
			Self::LocaleChanged => "locale-changed",
			Self::Manual => "manual",
		})
	}
}

/// One tracked instance whose re-injection failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepFailure {
	pub type_name: &'static str,
	pub error: InjectError,
}

/// Outcome of one pass over the tracked instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
	pub reason: SweepReason,
	/// Live instances the sweep reached.
	pub visited: usize,
	/// Instances whose bindings were all re-applied.
	pub injected: usize,
	pub failures: Vec<SweepFailure>,
	/// Whether [`SweepPolicy::Abort`](tint_config::SweepPolicy::Abort) cut the
	/// sweep short.
	pub aborted: bool,
}

impl SweepReport {
	pub(crate) fn new(reason: SweepReason) -> Self {
		Self {
			reason,
			visited: 0,
			injected: 0,
			failures: Vec::new(),
			aborted: false,
		}
	}

	/// True when every visited instance was re-injected.
	pub fn is_clean(&self) -> bool {
		self.failures.is_empty()
	}
}
