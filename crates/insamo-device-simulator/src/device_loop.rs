//! Per-device tick loop.
//!
//! One loop per device, each owning its state and random source outright,
//! so no locking exists between devices. The loop is a two-state machine:
//! RUNNING from launch, STOPPED (terminal) once the cancellation token
//! fires. Ticks are strictly sequential within a device: the publish
//! attempt of tick N completes or times out before tick N+1 starts.

use std::sync::Arc;
use std::time::Duration;

use insamo_core::{DeviceState, Reading, ReadingGenerator};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::publisher::{PublishStats, Publisher};
use crate::registry::DeviceEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Stopped,
}

pub struct DeviceLoop {
    code: String,
    state: DeviceState,
    generator: ReadingGenerator,
    publisher: Arc<dyn Publisher>,
    tick_interval: Duration,
    stats: Arc<PublishStats>,
}

impl DeviceLoop {
    pub fn new(
        entry: &DeviceEntry,
        seed: u64,
        publisher: Arc<dyn Publisher>,
        tick_interval: Duration,
        stats: Arc<PublishStats>,
    ) -> Self {
        Self {
            code: entry.code.clone(),
            state: DeviceState::initial(entry.class),
            generator: ReadingGenerator::new(seed),
            publisher,
            tick_interval,
            stats,
        }
    }

    /// Runs until `shutdown` is cancelled; returns the number of completed
    /// ticks. Cancellation is observed at the tick boundary, so the loop
    /// stops within one tick interval (plus at most one in-flight publish).
    pub async fn run(mut self, shutdown: CancellationToken) -> u64 {
        let mut interval = tokio::time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut loop_state = LoopState::Running;
        let mut ticks = 0u64;

        while loop_state == LoopState::Running {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    loop_state = LoopState::Stopped;
                }
                _ = interval.tick() => {
                    self.tick().await;
                    ticks += 1;
                }
            }
        }

        debug!(device = %self.code, ticks, "device loop stopped");
        ticks
    }

    /// One tick: advance the walk, snapshot a reading, attempt one publish.
    /// The outcome never alters loop state; a failed reading is dropped.
    async fn tick(&mut self) {
        self.generator.advance(&mut self.state);
        let reading = Reading::capture(&self.code, &self.state);

        match self.publisher.publish(&reading).await {
            Ok(()) => {
                self.stats.record_success();
                debug!(device = %self.code, "reading published");
            }
            Err(e) => {
                self.stats.record_failure();
                warn!(device = %self.code, error = %e, "publish failed, reading dropped");
            }
        }
    }
}
