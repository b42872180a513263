//! Windows SERIALCOMM registry enrichment
//!
//! Reads `HKLM\HARDWARE\DEVICEMAP\SERIALCOMM` through `reg query` and turns each
//! `REG_SZ` value into a [`Port`]. This source is best effort: any failure
//! yields an empty list and the inventory falls back to the device scan.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{sort_ports, Port};

/// Registry key listing active serial device mappings
pub const SERIALCOMM_KEY: &str = r"HKEY_LOCAL_MACHINE\HARDWARE\DEVICEMAP\SERIALCOMM";

/// Lowercase substrings that mark a port as software-emulated
pub const VIRTUAL_MARKERS: [&str; 5] = ["com0com", "virtual", "null-modem", "emulator", "loopback"];

const STRING_VALUE_MARKER: &str = "REG_SZ";

static REG_SZ_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+REG_SZ\s+(.+)$").unwrap());

/// A secondary source of port records that may add metadata or extra ports
pub trait EnrichmentSource {
    /// Records from this source; empty when nothing is available
    fn records(&self) -> Vec<Port>;
}

/// Enrichment source that never contributes anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEnrichment;

impl EnrichmentSource for NoEnrichment {
    fn records(&self) -> Vec<Port> {
        Vec::new()
    }
}

/// SERIALCOMM registry source. Returns nothing on non-Windows hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrySource;

impl EnrichmentSource for RegistrySource {
    fn records(&self) -> Vec<Port> {
        match query_serialcomm() {
            Some(text) => {
                let ports = parse_reg_query_output(&text);
                tracing::debug!("SERIALCOMM listed {} port(s)", ports.len());
                ports
            }
            None => Vec::new(),
        }
    }
}

#[cfg(windows)]
fn query_serialcomm() -> Option<String> {
    use std::process::Command;

    let output = match Command::new("reg").args(["query", SERIALCOMM_KEY]).output() {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!("Failed to run reg query: {e}");
            return None;
        }
    };

    if !output.status.success() {
        tracing::warn!("reg query {SERIALCOMM_KEY} exited with {}", output.status);
        return None;
    }

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    Some(text)
}

#[cfg(not(windows))]
fn query_serialcomm() -> Option<String> {
    None
}

/// Parse the text printed by `reg query` for the SERIALCOMM key.
///
/// Lines look like `    \Device\Serial0    REG_SZ    COM1`. The data column
/// becomes the port path and the value name (everything before the first run of
/// two spaces) becomes both friendly name and device path. Lines without a
/// `REG_SZ` value or with empty data are skipped. The result is sorted.
pub fn parse_reg_query_output(text: &str) -> Vec<Port> {
    let text = text.replace("\r\n", "\n");
    let mut found = Vec::new();

    for line in text.split('\n') {
        if !line.contains(STRING_VALUE_MARKER) {
            continue;
        }
        let Some(caps) = REG_SZ_VALUE.captures(line) else {
            continue;
        };
        let path = caps[1].trim();
        if path.is_empty() {
            continue;
        }

        let value_name = line
            .trim()
            .split("  ")
            .next()
            .unwrap_or_default()
            .trim();

        let mut port = Port::serialcomm(path, value_name);
        port.is_virtual = is_virtual(&port.device_path, &port.path);
        found.push(port);
    }

    sort_ports(&mut found);
    found
}

/// Whether the registry text for a port suggests an emulated device
pub fn is_virtual(device_path: &str, path: &str) -> bool {
    let haystack = format!("{device_path} {path}").to_lowercase();
    VIRTUAL_MARKERS.iter().any(|m| haystack.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::PortSource;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\r\n\
HKEY_LOCAL_MACHINE\\HARDWARE\\DEVICEMAP\\SERIALCOMM\r\n\
    \\Device\\Serial0    REG_SZ    COM1\r\n\
    \\Device\\VCP0    REG_SZ    COM10\r\n\
    \\Device\\com0com10    REG_SZ    CNCA0\r\n\
    \\Device\\USBSER000    REG_SZ    COM3\r\n\
\r\n";

    #[test]
    fn test_parse_sample_output() {
        let ports = parse_reg_query_output(SAMPLE);
        let paths: Vec<&str> = ports.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec!["CNCA0", "COM1", "COM3", "COM10"]);

        let com1 = &ports[1];
        assert_eq!(com1.friendly_name, "\\Device\\Serial0");
        assert_eq!(com1.device_path, "\\Device\\Serial0");
        assert_eq!(com1.source, PortSource::Serialcomm);
        assert!(!com1.is_virtual);
        assert_eq!(com1.manufacturer, "");
    }

    #[test]
    fn test_virtual_markers() {
        let ports = parse_reg_query_output(SAMPLE);
        let cnca = ports.iter().find(|p| p.path == "CNCA0").unwrap();
        assert!(cnca.is_virtual);

        assert!(is_virtual("\\Device\\COM0COM5", "COM5"));
        assert!(is_virtual("\\Device\\Serial0", "VIRTUALCOM"));
        assert!(is_virtual("\\Device\\Null-Modem", "COM9"));
        assert!(is_virtual("\\Device\\LoopBack1", "COM9"));
        assert!(is_virtual("\\Device\\Emulator", "COM9"));
        assert!(!is_virtual("\\Device\\Serial0", "COM1"));
    }

    #[test]
    fn test_skips_unrelated_lines() {
        let text = "\
HKEY_LOCAL_MACHINE\\HARDWARE\\DEVICEMAP\\SERIALCOMM
    \\Device\\Serial0    REG_DWORD    0x1
    REG_SZ
    \\Device\\Serial1    REG_SZ    COM2
";
        let ports = parse_reg_query_output(text);
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].path, "COM2");
        assert_eq!(ports[0].device_path, "\\Device\\Serial1");
    }

    #[test]
    fn test_value_name_stops_at_double_space() {
        let text = "    \\Device\\My Port  Two    REG_SZ    COM7\n";
        let ports = parse_reg_query_output(text);
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].path, "COM7");
        assert_eq!(ports[0].friendly_name, "\\Device\\My Port");
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(parse_reg_query_output("").is_empty());
        assert!(parse_reg_query_output("ERROR: The system was unable to find the specified registry key").is_empty());
    }

    #[test]
    fn test_no_enrichment_is_empty() {
        assert!(NoEnrichment.records().is_empty());
    }

    #[cfg(not(windows))]
    #[test]
    fn test_registry_source_empty_off_windows() {
        assert!(RegistrySource.records().is_empty());
    }
}
