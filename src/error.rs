//! Error types for dialflow.

use thiserror::Error;

use crate::mixer::Target;

/// Main error type for dialflow operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The selected process no longer has an audio session.
    #[error("target gone: {0}")]
    TargetGone(Target),

    /// Incoming line is neither a keyword nor an integer.
    #[error("malformed command: {0:?}")]
    MalformedCommand(String),

    /// Serial link read/write failed.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// Serial port could not be opened or configured.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// No usable serial port.
    #[error("no serial port found")]
    NoPort,

    /// Audio backend could not be initialised.
    #[error("audio provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// A single audio backend call failed.
    #[error("audio provider error: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, Error>;
