//! Per-class tick generators.
//!
//! A [`ReadingGenerator`] owns the random source for one device and advances
//! that device's [`DeviceState`] by one tick of bounded random walks. All
//! inputs are in range by invariant, so generation cannot fail.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::device::{DeviceState, EnvironmentalState, RiskState, RiskStatus, StabilityState};
use crate::walk::bounded_step;

// Per-field step sizes.
const TILT_STEP: f64 = 0.15;
const MAGNITUDE_STEP: f64 = 0.25;
const STABILITY_TEMP_STEP: f64 = 0.1;

const WATER_LEVEL_STEP: f64 = 1.2;
const WIND_SPEED_STEP: f64 = 0.4;
const ENV_TEMP_STEP: f64 = 0.1;
const RAINFALL_STEP: f64 = 0.3;
const HUMIDITY_STEP: f64 = 1.0;

const SOIL_MOISTURE_STEP: f64 = 1.0;
const SLOPE_ANGLE_STEP: f64 = 0.25;

// Fixed risk policy constants.
const SOIL_MOISTURE_WEIGHT: f64 = 0.6;
const SLOPE_ANGLE_WEIGHT: f64 = 0.9;
const DANGER_THRESHOLD: u8 = 60;

/// Computes the derived landslide score and status from the walked fields.
///
/// `score = soil_moisture * 0.6 + slope_angle * 0.9`, clamped to [0, 100]
/// and truncated to an integer; DANGER at 60 points and above.
pub fn risk_score(soil_moisture: f64, slope_angle: f64) -> (u8, RiskStatus) {
    let score = soil_moisture * SOIL_MOISTURE_WEIGHT + slope_angle * SLOPE_ANGLE_WEIGHT;
    let score = score.clamp(0.0, 100.0) as u8;
    let status = if score >= DANGER_THRESHOLD {
        RiskStatus::Danger
    } else {
        RiskStatus::Stable
    };
    (score, status)
}

/// Advances one device's state tick by tick.
pub struct ReadingGenerator {
    rng: StdRng,
}

impl ReadingGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Mutates `state` in place to this tick's values.
    pub fn advance(&mut self, state: &mut DeviceState) {
        match state {
            DeviceState::Stability(s) => self.advance_stability(s),
            DeviceState::Environmental(s) => self.advance_environmental(s),
            DeviceState::Risk(s) => self.advance_risk(s),
        }
    }

    fn advance_stability(&mut self, s: &mut StabilityState) {
        s.tilt_x = bounded_step(&mut self.rng, s.tilt_x, TILT_STEP, -10.0, 10.0);
        s.tilt_y = bounded_step(&mut self.rng, s.tilt_y, TILT_STEP, -10.0, 10.0);
        s.magnitude = bounded_step(&mut self.rng, s.magnitude, MAGNITUDE_STEP, 0.0, 15.0);
        s.temperature =
            bounded_step(&mut self.rng, s.temperature, STABILITY_TEMP_STEP, 20.0, 40.0);
    }

    fn advance_environmental(&mut self, s: &mut EnvironmentalState) {
        s.water_level = bounded_step(&mut self.rng, s.water_level, WATER_LEVEL_STEP, 0.0, 200.0);
        s.wind_speed = bounded_step(&mut self.rng, s.wind_speed, WIND_SPEED_STEP, 0.0, 60.0);
        s.temperature = bounded_step(&mut self.rng, s.temperature, ENV_TEMP_STEP, 15.0, 45.0);
        s.rainfall_intensity =
            bounded_step(&mut self.rng, s.rainfall_intensity, RAINFALL_STEP, 0.0, 30.0);
        s.humidity = bounded_step(&mut self.rng, s.humidity, HUMIDITY_STEP, 30.0, 100.0);
    }

    fn advance_risk(&mut self, s: &mut RiskState) {
        s.soil_moisture =
            bounded_step(&mut self.rng, s.soil_moisture, SOIL_MOISTURE_STEP, 10.0, 90.0);
        s.slope_angle = bounded_step(&mut self.rng, s.slope_angle, SLOPE_ANGLE_STEP, 0.0, 45.0);

        let (score, status) = risk_score(s.soil_moisture, s.slope_angle);
        s.landslide_score = score;
        s.current_status = status;
    }
}
