//! Bounded in-memory throttle store.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use sha2::{Digest, Sha256};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::domain::repositories::ThrottleStore;

/// Lock-sharded map from credential fingerprint to last access time.
///
/// # Keys
///
/// Credentials are stored as hex-encoded SHA-256 digests, so raw bearer
/// tokens never stay resident and every key has the same size.
///
/// # Atomicity
///
/// [`ThrottleStore::peek_and_touch`] runs under the shard lock of the
/// credential's entry. Concurrent calls for the same credential are
/// serialized; calls for different credentials mostly proceed in parallel.
///
/// # Memory Bound
///
/// The store holds at most `capacity` credentials (approximately, under
/// concurrent inserts). When a new credential arrives at a full store:
///
/// 1. Entries older than `window` are dropped. They can no longer cause a
///    denial, so this never changes a verdict. This full pass runs at most
///    once per `window`.
/// 2. If the store is still full, the least recently touched entry among the
///    first [`EVICTION_SAMPLE`] entries is evicted (approximate LRU).
pub struct InMemoryThrottleStore {
    entries: DashMap<String, Instant>,
    window: Duration,
    capacity: usize,
    last_sweep: Mutex<Option<Instant>>,
}

/// Number of entries inspected when choosing an eviction victim.
pub const EVICTION_SAMPLE: usize = 64;

impl InMemoryThrottleStore {
    /// Creates an empty store.
    ///
    /// `capacity` is clamped to at least 1.
    pub fn new(window: Duration, capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            window,
            capacity: capacity.max(1),
            last_sweep: Mutex::new(None),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn fingerprint(credential: &str) -> String {
        hex::encode(Sha256::digest(credential.as_bytes()))
    }

    fn sweep_due(&self, now: Instant) -> bool {
        let last_sweep = *self.last_sweep.lock().unwrap_or_else(|e| e.into_inner());
        last_sweep.is_none_or(|last| now.saturating_duration_since(last) >= self.window)
    }

    /// Frees at least one slot if the store is full.
    ///
    /// Must not be called while holding a reference into `entries`.
    fn make_room(&self, now: Instant) {
        if self.entries.len() < self.capacity {
            return;
        }

        if self.sweep_due(now) {
            let swept = self.sweep(now);
            if swept > 0 && self.entries.len() < self.capacity {
                return;
            }
        }

        let oldest = self
            .entries
            .iter()
            .take(EVICTION_SAMPLE)
            .min_by_key(|entry| *entry.value())
            .map(|entry| entry.key().clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
            debug!("Throttle store full, evicted least recently used credential");
        }
    }
}

impl ThrottleStore for InMemoryThrottleStore {
    fn peek_and_touch(&self, credential: &str, now: Instant) -> Option<Instant> {
        let key = Self::fingerprint(credential);

        if !self.entries.contains_key(&key) {
            self.make_room(now);
        }

        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => {
                let previous = *entry.get();
                if now > previous {
                    entry.insert(now);
                }
                Some(previous)
            }
            Entry::Vacant(entry) => {
                entry.insert(now);
                None
            }
        }
    }

    fn sweep(&self, now: Instant) -> usize {
        *self.last_sweep.lock().unwrap_or_else(|e| e.into_inner()) = Some(now);

        let mut removed = 0;
        self.entries.retain(|_, last_access| {
            let live = now.saturating_duration_since(*last_access) < self.window;
            if !live {
                removed += 1;
            }
            live
        });
        removed
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
