//! Synthetic telemetry feeder for the INSAMO monitoring platform.
//!
//! Drives one independent loop per configured device: each tick the loop
//! advances that device's bounded random-walk state, snapshots a reading
//! and posts it to the ingestion endpoint. Loops share nothing and stop
//! together on a process-wide cancellation signal.
//!
//! # Usage
//! ```bash
//! # Default device set against a local backend
//! insamo-device-simulator
//!
//! # Explicit devices, faster cadence
//! insamo-device-simulator --device SIGMA-001 --device LANDSLIDE-003 \
//!     --interval-ms 500 --server http://localhost:8000/api
//! ```

pub mod config;
pub mod device_loop;
pub mod publisher;
pub mod registry;
pub mod supervisor;

pub use config::SimulatorConfig;
pub use publisher::{HttpPublisher, PublishError, Publisher};
pub use supervisor::{run_simulation, RunSummary};
