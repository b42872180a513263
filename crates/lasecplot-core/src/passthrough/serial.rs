//! Serial port handling

use serialport::SerialPort;
use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use super::{OpenConfig, OpenError};

const CHUNK_SIZE: usize = 4096;

/// Open a serial port for exclusive use at the configured baud rate.
///
/// The read timeout is applied at open, so a silent device ends a read after
/// `timeout_ms` instead of blocking forever.
pub fn open_port(config: &OpenConfig) -> Result<Box<dyn SerialPort>, OpenError> {
    tracing::debug!(
        "Opening {} at {} baud (timeout {}ms)",
        config.port_name,
        config.baud_rate,
        config.timeout_ms
    );

    serialport::new(&config.port_name, config.baud_rate)
        .timeout(Duration::from_millis(config.timeout_ms))
        .open()
        .map_err(|source| OpenError::Serial {
            port: config.port_name.clone(),
            source,
        })
}

/// Copy bytes from `reader` to `writer` until end of stream, a read timeout or
/// any other error. Errors end the copy silently. Each chunk is flushed as soon
/// as it is written. Returns the number of bytes copied.
pub fn stream_to<R, W>(reader: &mut R, writer: &mut W) -> u64
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::debug!("Read stopped: {e}");
                break;
            }
        };

        if let Err(e) = writer.write_all(&buf[..n]).and_then(|_| writer.flush()) {
            tracing::debug!("Write stopped: {e}");
            break;
        }
        total += n as u64;
    }

    total
}
