//! Command line surface

use clap::Parser;
use lasecplot_core::inventory::ScanOptions;
use lasecplot_core::passthrough::{OpenConfig, DEFAULT_BAUD_RATE, DEFAULT_READ_TIMEOUT_MS};

/// List serial ports as JSON, or open one port and stream its bytes to stdout
#[derive(Parser, Debug)]
#[command(name = "lasecplot-helper", version, about)]
pub struct Cli {
    /// Optional command word (listing is the default)
    #[arg(value_parser = ["list"], conflicts_with = "open")]
    pub command: Option<String>,

    /// Serial port to open (e.g. COM3, /dev/ttyUSB0)
    #[arg(long, value_name = "PORT")]
    pub open: Option<String>,

    /// Baud rate used with --open
    #[arg(long, value_name = "N", default_value_t = DEFAULT_BAUD_RATE)]
    pub baud: u32,

    /// Copy bytes received on the opened port to stdout
    #[arg(long)]
    pub read: bool,

    /// Read timeout in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_READ_TIMEOUT_MS)]
    pub timeout: u64,

    /// Fill manufacturer and product fields for USB ports
    #[arg(long)]
    pub usb_details: bool,

    /// Debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// What one invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List(ScanOptions),
    Open(OpenConfig),
}

impl Cli {
    pub fn mode(&self) -> Mode {
        match &self.open {
            Some(port_name) => Mode::Open(OpenConfig {
                port_name: port_name.clone(),
                baud_rate: self.baud,
                read: self.read,
                timeout_ms: self.timeout,
            }),
            None => Mode::List(ScanOptions {
                usb_details: self.usb_details,
            }),
        }
    }
}
