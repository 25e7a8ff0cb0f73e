//! Simulation supervisor.
//!
//! Resolves the configured device set, launches one loop per admitted
//! device and blocks until every loop has reached its terminal state after
//! the shutdown token fires.

use std::collections::BTreeMap;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use insamo_core::CoreError;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::SimulatorConfig;
use crate::device_loop::DeviceLoop;
use crate::publisher::{PublishStats, Publisher};
use crate::registry::resolve_devices;

/// Outcome of a completed simulation run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Completed ticks per device, keyed by device code.
    pub ticks: BTreeMap<String, u64>,
    /// Readings accepted by the endpoint.
    pub published: u64,
    /// Readings dropped after a failed attempt.
    pub failed: u64,
}

/// Runs one device loop per configured device until `shutdown` fires.
///
/// Unrecognized device prefixes are reported and skipped; the run is an
/// error only when no valid device remains. A device loop failure never
/// affects the other loops.
pub async fn run_simulation(
    config: SimulatorConfig,
    publisher: Arc<dyn Publisher>,
    shutdown: CancellationToken,
) -> Result<RunSummary, CoreError> {
    let (entries, rejected) = resolve_devices(&config.devices);

    for rejection in &rejected {
        warn!("{rejection} (device excluded from simulation)");
    }

    if entries.is_empty() {
        return Err(CoreError::NoValidDevices);
    }

    info!(
        endpoint = %config.server_url,
        interval = ?config.tick_interval,
        devices = entries.len(),
        "starting simulation"
    );
    for entry in &entries {
        info!(device = %entry.code, class = entry.class.as_str(), "device admitted");
    }

    let stats = Arc::new(PublishStats::new());
    let mut loops = JoinSet::new();

    for (idx, entry) in entries.iter().enumerate() {
        let seed = match config.seed {
            Some(base) => base.wrapping_add(idx as u64),
            None => rand::random(),
        };

        let device_loop = DeviceLoop::new(
            entry,
            seed,
            Arc::clone(&publisher),
            config.tick_interval,
            Arc::clone(&stats),
        );

        let code = entry.code.clone();
        let token = shutdown.clone();
        loops.spawn(async move { (code, device_loop.run(token).await) });
    }

    // Block until every loop reaches STOPPED. Loops only exit once the
    // shutdown token is cancelled, so this is the process's steady state.
    let mut ticks = BTreeMap::new();
    while let Some(joined) = loops.join_next().await {
        match joined {
            Ok((code, count)) => {
                ticks.insert(code, count);
            }
            Err(e) => {
                // One panicked loop must not take down the rest.
                error!(error = %e, "device loop aborted");
            }
        }
    }

    let summary = RunSummary {
        ticks,
        published: stats.published.load(Ordering::Relaxed),
        failed: stats.failed.load(Ordering::Relaxed),
    };

    info!(
        published = summary.published,
        failed = summary.failed,
        "simulation stopped"
    );
    for (code, count) in &summary.ticks {
        info!(device = %code, ticks = count, "device summary");
    }

    Ok(summary)
}
