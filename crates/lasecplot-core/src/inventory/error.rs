//! Inventory errors

use thiserror::Error;

/// Errors that can occur while emitting the port inventory
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Failed to serialize port inventory: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write port inventory: {0}")]
    Io(#[from] std::io::Error),
}
