//! Portable device scan backed by the `serialport` crate

use serialport::{SerialPortInfo, SerialPortType};

use super::Port;

/// Options for the portable device scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Fill manufacturer / product metadata for USB-attached ports
    pub usb_details: bool,
}

/// Base list of ports present on the host
pub trait DeviceScan {
    /// Ports found by this scan, each with source `serial`
    fn scan(&self) -> Vec<Port>;
}

/// Scan through `serialport::available_ports()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemScan {
    options: ScanOptions,
}

impl SystemScan {
    /// Create a scan with the given options
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }
}

impl DeviceScan for SystemScan {
    fn scan(&self) -> Vec<Port> {
        let infos = match serialport::available_ports() {
            Ok(infos) => infos,
            Err(e) => {
                tracing::warn!("Serial port enumeration failed: {e}");
                Vec::new()
            }
        };
        tracing::debug!("serialport listed {} port(s)", infos.len());

        infos
            .into_iter()
            .map(|info| port_from_info(info, self.options.usb_details))
            .collect()
    }
}

/// A fixed list of paths, used where the host scan is not wanted
impl DeviceScan for Vec<String> {
    fn scan(&self) -> Vec<Port> {
        self.iter().map(Port::serial).collect()
    }
}

fn port_from_info(info: SerialPortInfo, usb_details: bool) -> Port {
    let mut port = Port::serial(info.port_name);
    if !usb_details {
        return port;
    }

    if let SerialPortType::UsbPort(usb) = info.port_type {
        port.manufacturer = usb.manufacturer.unwrap_or_default();
        port.product_id = format!("{:04x}", usb.pid);
        port.pnp_id = format!("USB\\VID_{:04X}&PID_{:04X}", usb.vid, usb.pid);
    }
    port
}
