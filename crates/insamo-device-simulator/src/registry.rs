//! Static device registry resolution.
//!
//! The device set arrives as an ordered list of opaque codes; the code
//! prefix selects the device class once, at configuration time. Codes with
//! an unrecognized prefix are excluded from simulation and reported, never
//! fatal on their own.

use insamo_core::{CoreError, DeviceClass};

/// A configured device admitted to the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    pub code: String,
    pub class: DeviceClass,
}

/// Splits the configured codes into admitted devices and rejections.
///
/// Order of the admitted devices follows the input order.
pub fn resolve_devices(codes: &[String]) -> (Vec<DeviceEntry>, Vec<CoreError>) {
    let mut entries = Vec::with_capacity(codes.len());
    let mut rejected = Vec::new();

    for code in codes {
        match DeviceClass::from_device_code(code) {
            Some(class) => entries.push(DeviceEntry {
                code: code.clone(),
                class,
            }),
            None => rejected.push(CoreError::UnknownDevicePrefix(code.clone())),
        }
    }

    (entries, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_known_prefixes_in_order() {
        let (entries, rejected) =
            resolve_devices(&codes(&["SIGMA-001", "FLOWS-001", "LANDSLIDE-001"]));

        assert!(rejected.is_empty());
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].code, "SIGMA-001");
        assert_eq!(entries[0].class, DeviceClass::Stability);
        assert_eq!(entries[1].class, DeviceClass::Environmental);
        assert_eq!(entries[2].class, DeviceClass::Risk);
    }

    #[test]
    fn unknown_prefix_is_rejected_not_fatal() {
        let (entries, rejected) = resolve_devices(&codes(&["UNKNOWN-001", "SIGMA-002"]));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].code, "SIGMA-002");
        assert_eq!(rejected.len(), 1);
        assert!(rejected[0].to_string().contains("UNKNOWN-001"));
    }

    #[test]
    fn empty_input_yields_nothing() {
        let (entries, rejected) = resolve_devices(&[]);
        assert!(entries.is_empty());
        assert!(rejected.is_empty());
    }
}
