//! Configuration for the simulator.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Ingestion API base URL (e.g. "http://localhost:8000/api")
    pub server_url: String,

    /// Device codes to simulate; class is resolved from the code prefix
    pub devices: Vec<String>,

    /// Interval between ticks for every device loop
    pub tick_interval: Duration,

    /// Upper bound on a single publish attempt
    pub publish_timeout: Duration,

    /// Base seed for the per-device walk generators; random when absent
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8000/api".to_string(),
            devices: vec![
                "SIGMA-001".to_string(),
                "FLOWS-001".to_string(),
                "LANDSLIDE-001".to_string(),
            ],
            tick_interval: Duration::from_secs(1),
            publish_timeout: Duration::from_secs(5),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_deployment() {
        let config = SimulatorConfig::default();
        assert_eq!(config.server_url, "http://localhost:8000/api");
        assert_eq!(config.devices.len(), 3);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.publish_timeout, Duration::from_secs(5));
        assert!(config.seed.is_none());
    }
}
