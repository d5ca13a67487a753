//! Background task that keeps the throttle store bounded.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};

use crate::domain::clock::Clock;
use crate::domain::repositories::ThrottleStore;

/// Periodically drops throttle entries that can no longer cause a denial.
///
/// Runs until the task is aborted. The first sweep happens one full
/// `period` after start.
pub async fn run_throttle_sweeper(
    store: Arc<dyn ThrottleStore>,
    clock: Arc<dyn Clock>,
    period: Duration,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;

    loop {
        ticker.tick().await;

        let removed = store.sweep(clock.now());
        if removed > 0 {
            tracing::debug!(
                removed,
                remaining = store.len(),
                "Swept expired throttle entries"
            );
        }
    }
}
