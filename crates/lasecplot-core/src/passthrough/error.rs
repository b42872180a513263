//! Passthrough errors

use thiserror::Error;

/// Errors that can occur while acquiring a serial device
#[derive(Error, Debug)]
pub enum OpenError {
    #[error("Failed to open {port}: {source}")]
    Serial {
        port: String,
        #[source]
        source: serialport::Error,
    },
}
