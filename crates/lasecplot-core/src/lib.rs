//! # LasecPlot Core Library
//!
//! Serial port discovery and passthrough for the LasecPlot helper process.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Port discovery through the portable `serialport` scan
//! - Windows SERIALCOMM registry enrichment
//! - Merging of both sources into one sorted, de-duplicated inventory
//! - Opening a port and streaming its bytes to a writer
//!
//! ## Example
//!
//! ```rust,ignore
//! use lasecplot_core::inventory::{list_ports, ScanOptions};
//!
//! let ports = list_ports(&ScanOptions::default());
//! for port in &ports {
//!     println!("{} ({:?})", port.path, port.source);
//! }
//! ```

pub mod inventory;
pub mod passthrough;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::inventory::{
        build_inventory, list_ports, merge_ports, normalize_key, sort_ports, DeviceScan,
        EnrichmentSource, InventoryError, NoEnrichment, Port, PortSource, RegistrySource,
        ScanOptions, SystemScan,
    };
    pub use crate::passthrough::{open_port, stream_to, OpenConfig, OpenError};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
