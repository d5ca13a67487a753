//! Storage contract for per-credential throttle timestamps.

use std::time::Instant;

/// Last-access bookkeeping for throttled credentials.
///
/// The store is the only shared mutable state of the admission gate. There is
/// no separate read and write: the decision input and the update happen in one
/// [`ThrottleStore::peek_and_touch`] call, and two concurrent requests for the
/// same credential never both observe "absent".
///
/// # Implementations
///
/// - [`crate::infrastructure::throttle::InMemoryThrottleStore`] - bounded, lock-sharded map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ThrottleStore: Send + Sync {
    /// Atomically returns the previous access time of `credential` (or `None`
    /// on first sight) and records `now` as its new access time.
    ///
    /// The stored value never moves backwards: if `now` is earlier than the
    /// recorded time, the recorded time is kept.
    fn peek_and_touch(&self, credential: &str, now: Instant) -> Option<Instant>;

    /// Drops entries that can no longer cause a denial at `now`.
    ///
    /// Returns the number of removed entries.
    fn sweep(&self, now: Instant) -> usize;

    /// Number of credentials currently tracked.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
