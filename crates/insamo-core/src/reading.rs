//! Per-tick reading snapshots and their wire representation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::device::{DeviceState, RiskStatus};

/// Class-specific sensor fields as they appear on the wire.
///
/// Serialized untagged so the published record is flat: field names and
/// types are fixed by the ingestion endpoint and must not be nested or
/// wrapped in a class discriminator.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SensorPayload {
    Stability {
        tilt_x: f64,
        tilt_y: f64,
        magnitude: f64,
        temperature: f64,
    },
    Environmental {
        water_level: f64,
        wind_speed: f64,
        temperature: f64,
        rainfall_intensity: f64,
        humidity: f64,
    },
    Risk {
        soil_moisture: f64,
        slope_angle: f64,
        landslide_score: u8,
        current_status: RiskStatus,
    },
}

impl SensorPayload {
    /// Snapshots the current values of a device state.
    pub fn from_state(state: &DeviceState) -> SensorPayload {
        match state {
            DeviceState::Stability(s) => SensorPayload::Stability {
                tilt_x: s.tilt_x,
                tilt_y: s.tilt_y,
                magnitude: s.magnitude,
                temperature: s.temperature,
            },
            DeviceState::Environmental(s) => SensorPayload::Environmental {
                water_level: s.water_level,
                wind_speed: s.wind_speed,
                temperature: s.temperature,
                rainfall_intensity: s.rainfall_intensity,
                humidity: s.humidity,
            },
            DeviceState::Risk(s) => SensorPayload::Risk {
                soil_moisture: s.soil_moisture,
                slope_angle: s.slope_angle,
                landslide_score: s.landslide_score,
                current_status: s.current_status,
            },
        }
    }
}

/// An immutable snapshot of one device's state at one tick.
///
/// Produced fresh each tick, handed to the publisher and then dropped;
/// nothing retains readings after publication.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub device_code: String,
    pub recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: SensorPayload,
}

impl Reading {
    /// Captures a reading for `device_code` from the current state, stamped
    /// with the current wall-clock time.
    pub fn capture(device_code: &str, state: &DeviceState) -> Reading {
        Reading {
            device_code: device_code.to_string(),
            recorded_at: Utc::now(),
            payload: SensorPayload::from_state(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceClass;

    #[test]
    fn stability_reading_serializes_flat() {
        let state = DeviceState::initial(DeviceClass::Stability);
        let reading = Reading::capture("SIGMA-001", &state);
        let value = serde_json::to_value(&reading).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj["device_code"], "SIGMA-001");
        assert!(obj["recorded_at"].is_string());
        assert!(obj["tilt_x"].is_number());
        assert!(obj["tilt_y"].is_number());
        assert!(obj["magnitude"].is_number());
        assert!(obj["temperature"].is_number());
        assert_eq!(obj.len(), 6);
    }

    #[test]
    fn environmental_reading_serializes_flat() {
        let state = DeviceState::initial(DeviceClass::Environmental);
        let reading = Reading::capture("FLOWS-001", &state);
        let value = serde_json::to_value(&reading).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj["device_code"], "FLOWS-001");
        for field in [
            "water_level",
            "wind_speed",
            "temperature",
            "rainfall_intensity",
            "humidity",
        ] {
            assert!(obj[field].is_number(), "missing field {field}");
        }
        assert_eq!(obj.len(), 7);
    }

    #[test]
    fn risk_reading_serializes_status_and_integer_score() {
        let state = DeviceState::initial(DeviceClass::Risk);
        let reading = Reading::capture("LANDSLIDE-001", &state);
        let value = serde_json::to_value(&reading).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj["current_status"], "STABLE");
        assert_eq!(obj["landslide_score"], 45);
        assert!(obj["soil_moisture"].is_number());
        assert!(obj["slope_angle"].is_number());
    }

    #[test]
    fn recorded_at_is_iso8601() {
        let state = DeviceState::initial(DeviceClass::Stability);
        let reading = Reading::capture("SIGMA-001", &state);
        let value = serde_json::to_value(&reading).unwrap();

        let ts = value["recorded_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok(), "bad timestamp: {ts}");
    }
}
