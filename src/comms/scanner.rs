use serialport::{self, SerialPort, SerialPortInfo, SerialPortType};
use std::io::Read;
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::utils::config::Config;

/// Prefers the first USB serial device, falling back to the first port of
/// any kind.
pub fn pick_port(ports: &[SerialPortInfo]) -> Option<String> {
    ports
        .iter()
        .find(|p| matches!(p.port_type, SerialPortType::UsbPort(_)))
        .or_else(|| ports.first())
        .map(|p| p.port_name.clone())
}

/// Opens the configured port, or discovers one, and waits for the board to
/// come out of its DTR reset.
pub fn open_port(config: &Config) -> Result<Box<dyn SerialPort>> {
    let port_name = match &config.port {
        Some(name) => name.clone(),
        None => {
            let ports = serialport::available_ports()?;
            for info in &ports {
                log::debug!("Found port: {}", info.port_name);
            }
            pick_port(&ports).ok_or(Error::NoPort)?
        }
    };

    log::info!("Opening {} at {} baud", port_name, config.baud_rate);
    let mut port = serialport::new(&port_name, config.baud_rate)
        .timeout(config.read_timeout())
        .flow_control(serialport::FlowControl::None)
        .open()?;

    thread::sleep(Duration::from_millis(config.boot_wait_ms));

    // Drop anything the board printed while booting
    let mut discard = [0u8; 256];
    match port.read(&mut discard) {
        Ok(n) => log::debug!("Cleared {} bytes from buffer", n),
        Err(_) => log::debug!("Buffer was empty"),
    }

    Ok(port)
}
