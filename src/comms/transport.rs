use std::io::{Read, Write};
use std::time::Duration;

use serialport::SerialPort;

use crate::error::{Error, Result};

/// Line-oriented link to the controller.
pub trait Transport {
    /// Next complete line, trimmed. Returns an empty string when nothing
    /// complete arrived within `timeout`.
    fn read_line(&mut self, timeout: Duration) -> Result<String>;

    fn write(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Longest run of bytes kept while waiting for a newline.
pub const MAX_PENDING: usize = 1024;

/// Accumulates raw bytes and hands out whole lines.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    /// Appends `bytes`, dropping the oldest ones beyond [`MAX_PENDING`].
    pub fn push(&mut self, bytes: &[u8]) {
        self.pending.extend_from_slice(bytes);
        if self.pending.len() > MAX_PENDING {
            let excess = self.pending.len() - MAX_PENDING;
            self.pending.drain(..excess);
        }
    }

    pub fn take_line(&mut self) -> Option<String> {
        let end = self.pending.iter().position(|&b| b == b'\n')?;
        let line: Vec<u8> = self.pending.drain(..=end).collect();
        Some(String::from_utf8_lossy(&line).trim().to_string())
    }
}

/// Byte stream whose read timeout can be changed.
pub trait TimeoutPort: Read + Write {
    fn set_read_timeout(&mut self, timeout: Duration) -> Result<()>;
}

impl TimeoutPort for Box<dyn SerialPort> {
    fn set_read_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.set_timeout(timeout)?;
        Ok(())
    }
}

pub struct SerialTransport<P = Box<dyn SerialPort>> {
    port: P,
    timeout: Duration,
    buffer: LineBuffer,
}

impl SerialTransport<Box<dyn SerialPort>> {
    pub fn new(port: Box<dyn SerialPort>) -> Self {
        let timeout = port.timeout();
        Self::with_timeout(port, timeout)
    }
}

impl<P: TimeoutPort> SerialTransport<P> {
    /// `timeout` is the read timeout `port` is currently configured with.
    pub fn with_timeout(port: P, timeout: Duration) -> Self {
        Self {
            port,
            timeout,
            buffer: LineBuffer::default(),
        }
    }
}

impl<P: TimeoutPort> Transport for SerialTransport<P> {
    fn read_line(&mut self, timeout: Duration) -> Result<String> {
        if let Some(line) = self.buffer.take_line() {
            return Ok(line);
        }

        if timeout != self.timeout {
            self.port.set_read_timeout(timeout)?;
            self.timeout = timeout;
        }

        let mut chunk = [0u8; 64];
        match self.port.read(&mut chunk) {
            Ok(n) => {
                self.buffer.push(&chunk[..n]);
                Ok(self.buffer.take_line().unwrap_or_default())
            }
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(String::new()),
            Err(e) => Err(Error::Transport(e)),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.port.write_all(bytes)?;
        self.port.flush()?;
        Ok(())
    }
}

/// Replays canned input lines and records everything written.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    pub incoming: std::collections::VecDeque<String>,
    pub written: Vec<u8>,
}

#[cfg(test)]
impl ScriptedTransport {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            incoming: lines.iter().map(|l| l.to_string()).collect(),
            written: Vec::new(),
        }
    }

    /// Everything written so far, cleared afterwards.
    pub fn take_output(&mut self) -> String {
        String::from_utf8(std::mem::take(&mut self.written)).unwrap()
    }
}

#[cfg(test)]
impl Transport for ScriptedTransport {
    fn read_line(&mut self, _timeout: Duration) -> Result<String> {
        self.incoming.pop_front().ok_or_else(|| {
            Error::Transport(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "script exhausted",
            ))
        })
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.written.extend_from_slice(bytes);
        Ok(())
    }
}
