//! INSAMO Core - Domain types for the device telemetry simulator
//!
//! This crate provides the pure, non-async half of the simulator:
//! - `DeviceClass`: the closed set of simulated sensor classes
//! - `DeviceState`: per-class mutable sensor values, bounded by invariant
//! - `ReadingGenerator`: advances a `DeviceState` by one tick of bounded
//!   random walks
//! - `Reading`: the immutable per-tick snapshot handed to the publisher

pub mod device;
pub mod error;
pub mod generator;
pub mod reading;
pub mod walk;

pub use device::{DeviceClass, DeviceState, RiskStatus};
pub use error::{CoreError, Result};
pub use generator::ReadingGenerator;
pub use reading::{Reading, SensorPayload};
