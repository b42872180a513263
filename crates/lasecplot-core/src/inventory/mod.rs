//! Serial Port Inventory
//!
//! Discovers serial ports from the portable `serialport` scan and, on Windows,
//! the SERIALCOMM registry key, then merges both into one de-duplicated list
//! ordered by port index.

mod error;
mod merge;
mod port;
pub mod registry;
pub mod scan;
mod sort;

use std::io::Write;

pub use error::InventoryError;
pub use merge::merge_ports;
pub use port::{normalize_key, Port, PortSource};
pub use registry::{parse_reg_query_output, EnrichmentSource, NoEnrichment, RegistrySource};
pub use scan::{DeviceScan, ScanOptions, SystemScan};
pub use sort::{compare_paths, sort_ports};

/// Run both sources and merge their results
pub fn build_inventory(scan: &dyn DeviceScan, enrichment: &dyn EnrichmentSource) -> Vec<Port> {
    let base = scan.scan();
    let registry = enrichment.records();
    let ports = merge_ports(base, registry);
    tracing::debug!("Inventory holds {} port(s)", ports.len());
    ports
}

/// List the host's serial ports using the system scan and registry source
pub fn list_ports(options: &ScanOptions) -> Vec<Port> {
    build_inventory(&SystemScan::new(*options), &RegistrySource)
}

/// Write ports as a 2-space indented JSON array followed by a newline
pub fn write_json<W: Write>(mut writer: W, ports: &[Port]) -> Result<(), InventoryError> {
    serde_json::to_writer_pretty(&mut writer, ports)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
