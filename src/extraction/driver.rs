//! Timer task that fakes extraction progress.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};
use uuid::Uuid;

use super::attempt::Tick;
use super::store::AttemptStore;

/// Default progress added per tick.
pub const DEFAULT_INCREMENT: u8 = 5;

/// Default time between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// How a driver task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverExit {
    /// The attempt reached 100%.
    Completed,
    /// The attempt was reset or removed before finishing.
    Abandoned,
}

/// Advances an attempt's progress on a fixed interval until it completes.
#[derive(Debug, Clone, Copy)]
pub struct ProgressDriver {
    increment: u8,
    tick_interval: Duration,
}

impl Default for ProgressDriver {
    fn default() -> Self {
        Self::new(DEFAULT_INCREMENT, DEFAULT_TICK_INTERVAL)
    }
}

impl ProgressDriver {
    #[must_use]
    pub fn new(increment: u8, tick_interval: Duration) -> Self {
        Self {
            increment: increment.max(1),
            tick_interval: tick_interval.max(Duration::from_millis(1)),
        }
    }

    #[must_use]
    pub fn increment(&self) -> u8 {
        self.increment
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Number of ticks from 0 to 100.
    #[must_use]
    pub fn ticks_to_complete(&self) -> u32 {
        100_u32.div_ceil(u32::from(self.increment))
    }

    /// Spawn the timer for attempt `id` on the current runtime.
    pub fn spawn(&self, store: AttemptStore, id: Uuid) -> JoinHandle<DriverExit> {
        let driver = *self;
        tokio::spawn(async move { driver.run(store, id).await })
    }

    /// Tick until the attempt completes or disappears from the store.
    pub async fn run(self, store: AttemptStore, id: Uuid) -> DriverExit {
        let mut ticker = interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick fires immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            match store.update(id, |attempt| attempt.advance(self.increment)) {
                Some(Tick::Progressed(progress)) => {
                    debug!(attempt_id = %id, progress, "Extraction progress");
                }
                Some(Tick::Completed) => {
                    info!(name: "extraction.completed", attempt_id = %id, "Extraction completed");
                    return DriverExit::Completed;
                }
                Some(Tick::Idle) | None => {
                    debug!(attempt_id = %id, "Attempt reset before completion, stopping timer");
                    return DriverExit::Abandoned;
                }
            }
        }
    }
}
