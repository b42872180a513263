//! Serial Passthrough
//!
//! Opens one serial device and copies whatever it sends to a writer.

mod error;
mod serial;

pub use error::OpenError;
pub use serial::{open_port, stream_to};

/// Default baud rate when none is given
pub const DEFAULT_BAUD_RATE: u32 = 115200;

/// Default read timeout in milliseconds
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 2000;

/// Settings for opening a serial device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenConfig {
    /// Serial port name
    pub port_name: String,
    /// Baud rate
    pub baud_rate: u32,
    /// Stream received bytes instead of only checking that the port opens
    pub read: bool,
    /// Read timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for OpenConfig {
    fn default() -> Self {
        Self {
            port_name: String::new(),
            baud_rate: DEFAULT_BAUD_RATE,
            read: false,
            timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }
}
