//! Device classes and per-class sensor state.

use serde::{Deserialize, Serialize};

/// Sensor classes simulated by INSAMO devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceClass {
    /// Structural stability / tilt sensors (SIGMA devices).
    Stability,
    /// Environmental / flow sensors (FLOWS devices).
    Environmental,
    /// Landslide risk sensors (LANDSLIDE devices).
    Risk,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Stability => "stability",
            DeviceClass::Environmental => "environmental",
            DeviceClass::Risk => "risk",
        }
    }

    /// Resolves the class from a device code prefix.
    ///
    /// `SIGMA*` maps to Stability, `FLOWS*` to Environmental and
    /// `LANDSLIDE*` to Risk. Any other prefix is unrecognized and the
    /// device must be excluded from simulation.
    pub fn from_device_code(code: &str) -> Option<DeviceClass> {
        if code.starts_with("SIGMA") {
            Some(DeviceClass::Stability)
        } else if code.starts_with("FLOWS") {
            Some(DeviceClass::Environmental)
        } else if code.starts_with("LANDSLIDE") {
            Some(DeviceClass::Risk)
        } else {
            None
        }
    }
}

/// Risk status derived from the landslide score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskStatus {
    Stable,
    Danger,
}

impl RiskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Stable => "STABLE",
            RiskStatus::Danger => "DANGER",
        }
    }
}

/// Current sensor values for a stability (SIGMA) device.
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityState {
    /// Tilt along X, degrees, [-10, 10].
    pub tilt_x: f64,
    /// Tilt along Y, degrees, [-10, 10].
    pub tilt_y: f64,
    /// Vibration magnitude, [0, 15].
    pub magnitude: f64,
    /// Enclosure temperature, °C, [20, 40].
    pub temperature: f64,
}

/// Current sensor values for an environmental (FLOWS) device.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentalState {
    /// Water level, cm, [0, 200].
    pub water_level: f64,
    /// Wind speed, km/h, [0, 60].
    pub wind_speed: f64,
    /// Air temperature, °C, [15, 45].
    pub temperature: f64,
    /// Rainfall intensity, mm/h, [0, 30].
    pub rainfall_intensity: f64,
    /// Relative humidity, %, [30, 100].
    pub humidity: f64,
}

/// Current sensor values for a landslide risk (LANDSLIDE) device.
///
/// `landslide_score` and `current_status` are derived from the walked
/// fields on every tick and are never mutated independently.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskState {
    /// Soil moisture, %, [10, 90].
    pub soil_moisture: f64,
    /// Slope angle, degrees, [0, 45].
    pub slope_angle: f64,
    /// Composite risk score, [0, 100].
    pub landslide_score: u8,
    /// STABLE or DANGER, derived from the score.
    pub current_status: RiskStatus,
}

/// Per-device mutable sensor state.
///
/// Owned exclusively by that device's loop: initialized once at startup,
/// advanced in place once per tick by [`crate::ReadingGenerator`], never
/// reset for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceState {
    Stability(StabilityState),
    Environmental(EnvironmentalState),
    Risk(RiskState),
}

impl DeviceState {
    /// Creates the initial state for a class: fixed mid-range defaults,
    /// in range for every bounded field, derived fields consistent.
    pub fn initial(class: DeviceClass) -> DeviceState {
        match class {
            DeviceClass::Stability => DeviceState::Stability(StabilityState {
                tilt_x: 0.0,
                tilt_y: 0.0,
                magnitude: 5.0,
                temperature: 25.0,
            }),
            DeviceClass::Environmental => DeviceState::Environmental(EnvironmentalState {
                water_level: 80.0,
                wind_speed: 12.0,
                temperature: 25.0,
                rainfall_intensity: 5.0,
                humidity: 60.0,
            }),
            DeviceClass::Risk => {
                let soil_moisture = 45.0;
                let slope_angle = 20.0;
                let (landslide_score, current_status) =
                    crate::generator::risk_score(soil_moisture, slope_angle);
                DeviceState::Risk(RiskState {
                    soil_moisture,
                    slope_angle,
                    landslide_score,
                    current_status,
                })
            }
        }
    }

    pub fn class(&self) -> DeviceClass {
        match self {
            DeviceState::Stability(_) => DeviceClass::Stability,
            DeviceState::Environmental(_) => DeviceClass::Environmental,
            DeviceState::Risk(_) => DeviceClass::Risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_resolution_from_prefix() {
        assert_eq!(
            DeviceClass::from_device_code("SIGMA-001"),
            Some(DeviceClass::Stability)
        );
        assert_eq!(
            DeviceClass::from_device_code("FLOWS-042"),
            Some(DeviceClass::Environmental)
        );
        assert_eq!(
            DeviceClass::from_device_code("LANDSLIDE-007"),
            Some(DeviceClass::Risk)
        );
        assert_eq!(DeviceClass::from_device_code("UNKNOWN-001"), None);
        assert_eq!(DeviceClass::from_device_code(""), None);
        // Prefix match, not exact match.
        assert_eq!(
            DeviceClass::from_device_code("SIGMA"),
            Some(DeviceClass::Stability)
        );
    }

    #[test]
    fn initial_states_are_in_range() {
        match DeviceState::initial(DeviceClass::Stability) {
            DeviceState::Stability(s) => {
                assert!((-10.0..=10.0).contains(&s.tilt_x));
                assert!((-10.0..=10.0).contains(&s.tilt_y));
                assert!((0.0..=15.0).contains(&s.magnitude));
                assert!((20.0..=40.0).contains(&s.temperature));
            }
            other => panic!("wrong variant: {other:?}"),
        }

        match DeviceState::initial(DeviceClass::Environmental) {
            DeviceState::Environmental(s) => {
                assert!((0.0..=200.0).contains(&s.water_level));
                assert!((0.0..=60.0).contains(&s.wind_speed));
                assert!((15.0..=45.0).contains(&s.temperature));
                assert!((0.0..=30.0).contains(&s.rainfall_intensity));
                assert!((30.0..=100.0).contains(&s.humidity));
            }
            other => panic!("wrong variant: {other:?}"),
        }

        match DeviceState::initial(DeviceClass::Risk) {
            DeviceState::Risk(s) => {
                assert!((10.0..=90.0).contains(&s.soil_moisture));
                assert!((0.0..=45.0).contains(&s.slope_angle));
                assert!(s.landslide_score <= 100);
                // 45 * 0.6 + 20 * 0.9 = 45 -> STABLE
                assert_eq!(s.landslide_score, 45);
                assert_eq!(s.current_status, RiskStatus::Stable);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }
}
