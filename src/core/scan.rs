//! Scan loop
//!
//! Owns the scan cycle: on a fixed period, fetch a snapshot from the
//! status provider and dispatch it. Fetch and dispatch run inline on the
//! single scan task, so two fetches are never in flight at once; ticks
//! that elapse while a slow fetch is outstanding are skipped rather than
//! bursted afterwards. A failed fetch is logged and the loop carries on.

use std::sync::Arc;
use std::time::Duration;

use log::{trace, warn};
use tokio::time::MissedTickBehavior;

use super::dispatcher::SnapshotDispatcher;
use super::provider::StatusProvider;

/// Default scan period.
pub const DEFAULT_SCAN_PERIOD: Duration = Duration::from_millis(1000);

/// Periodic fetch-and-dispatch driver.
pub struct ScanLoop {
    provider: Arc<dyn StatusProvider>,
    dispatcher: SnapshotDispatcher,
    period: Duration,
}

impl ScanLoop {
    pub fn new(provider: Arc<dyn StatusProvider>, dispatcher: SnapshotDispatcher) -> Self {
        Self {
            provider,
            dispatcher,
            period: DEFAULT_SCAN_PERIOD,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Run one scan cycle: fetch, then dispatch on success.
    pub async fn tick(&mut self) {
        match self.provider.fetch().await {
            Ok(snapshot) => {
                trace!("dispatching snapshot");
                self.dispatcher.dispatch(&snapshot);
            }
            Err(e) => warn!("status fetch failed: {:#}", e),
        }
    }

    /// Run scan cycles forever. The first cycle fires immediately.
    pub async fn run(mut self) {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            self.tick().await;
        }
    }

    pub fn dispatcher(&self) -> &SnapshotDispatcher {
        &self.dispatcher
    }
}
