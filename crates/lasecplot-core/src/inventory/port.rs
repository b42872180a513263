//! Port records and identity keys

use serde::{Deserialize, Serialize};

/// Which discovery source(s) produced a port record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortSource {
    /// Found only by the portable device scan
    #[serde(rename = "serial")]
    Serial,
    /// Found only in the SERIALCOMM registry key
    #[serde(rename = "SERIALCOMM")]
    Serialcomm,
    /// Found by both; the registry record was kept
    #[serde(rename = "SERIALCOMM+serial")]
    Combined,
}

impl PortSource {
    /// Label written to the JSON inventory
    pub fn as_str(&self) -> &'static str {
        match self {
            PortSource::Serial => "serial",
            PortSource::Serialcomm => "SERIALCOMM",
            PortSource::Combined => "SERIALCOMM+serial",
        }
    }
}

impl std::fmt::Display for PortSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discovered serial device
///
/// Optional text fields are empty strings when unknown, never absent, so the
/// serialized object always carries every key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    /// Name used to open the device (e.g., "COM3" or "/dev/ttyUSB0")
    pub path: String,

    /// Display label (Windows: registry value name)
    pub friendly_name: String,

    /// OS device path (Windows: registry value name, e.g. "\Device\Serial0")
    pub device_path: String,

    /// Manufacturer name (if available)
    pub manufacturer: String,

    /// Plug and Play identifier (if available)
    pub pnp_id: String,

    /// Physical location (if available)
    pub device_location: String,

    /// USB product ID (if available)
    pub product_id: String,

    /// Provenance of this record
    pub source: PortSource,

    /// Heuristic: the registry text looks like an emulated device
    pub is_virtual: bool,
}

impl Port {
    /// Bare record as reported by the portable device scan
    pub fn serial(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            friendly_name: String::new(),
            device_path: String::new(),
            manufacturer: String::new(),
            pnp_id: String::new(),
            device_location: String::new(),
            product_id: String::new(),
            source: PortSource::Serial,
            is_virtual: false,
        }
    }

    /// Registry record; the value name doubles as friendly name and device path
    pub fn serialcomm(path: impl Into<String>, value_name: impl Into<String>) -> Self {
        let value_name = value_name.into();
        Self {
            friendly_name: value_name.clone(),
            device_path: value_name,
            source: PortSource::Serialcomm,
            ..Self::serial(path)
        }
    }

    /// Canonical identity used to match records across sources
    pub fn key(&self) -> String {
        normalize_key(&self.path)
    }
}

/// ASCII-uppercase a port path.
///
/// Only `a`-`z` are touched so the key never depends on locale rules.
pub fn normalize_key(path: &str) -> String {
    path.to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key_ascii_case() {
        assert_eq!(normalize_key("com3"), "COM3");
        assert_eq!(normalize_key("Com3"), normalize_key("cOM3"));
        assert_eq!(normalize_key("/dev/ttyUSB0"), "/DEV/TTYUSB0");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn test_normalize_key_leaves_non_ascii() {
        // Unicode lowercase letters are not folded
        assert_eq!(normalize_key("ß-port"), "ß-PORT");
        assert_eq!(normalize_key("é1"), "é1");
    }

    #[test]
    fn test_serialize_field_names() {
        let port = Port::serialcomm("COM3", "\\Device\\Serial0");
        let json = serde_json::to_value(&port).unwrap();
        let obj = json.as_object().unwrap();

        let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        for expected in [
            "path",
            "friendlyName",
            "devicePath",
            "manufacturer",
            "pnpId",
            "deviceLocation",
            "productId",
            "source",
            "isVirtual",
        ] {
            assert!(keys.contains(&expected), "missing {expected}");
        }
        assert_eq!(obj.len(), 9);
        assert_eq!(obj["source"], "SERIALCOMM");
        assert_eq!(obj["manufacturer"], "");
        assert_eq!(obj["isVirtual"], false);
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(PortSource::Serial.to_string(), "serial");
        assert_eq!(
            serde_json::to_string(&PortSource::Combined).unwrap(),
            "\"SERIALCOMM+serial\""
        );
    }
}
