//! Throttle store implementations.
//!
//! - [`InMemoryThrottleStore`] - Bounded, lock-sharded process-local store

mod memory_store;

pub use memory_store::InMemoryThrottleStore;
