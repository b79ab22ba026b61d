// protocol.rs - Line protocol spoken by the dial firmware
//
// Device -> host: one command per newline-terminated line.
// Host -> device: `FIELD:value#` frames, no escaping.

use crate::error::{Error, Result};

pub const DELIMITER: char = '#';

pub const FIELD_VOLUME: &str = "VOL";
pub const FIELD_APP: &str = "APP";

pub const KEY_NEXT: &str = "CLICK+";
pub const KEY_PREVIOUS: &str = "CLICK-";
pub const KEY_MUTE: &str = "MUTE";
pub const KEY_INIT: &str = "INIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the next target.
    Next,
    /// Select the previous target.
    Previous,
    ToggleMute,
    /// Device (re)started and wants the full state.
    Init,
    /// Raw percentage as sent; not yet clamped.
    SetVolume(i32),
    /// Nothing arrived before the read timeout.
    Poll,
}

/// Classifies one incoming line. Keywords match by substring, checked in
/// the order `CLICK+`, `CLICK-`, `MUTE`, `INIT`.
pub fn decode(line: &str) -> Result<Command> {
    let line = line.trim();
    if line.contains(KEY_NEXT) {
        Ok(Command::Next)
    } else if line.contains(KEY_PREVIOUS) {
        Ok(Command::Previous)
    } else if line.contains(KEY_MUTE) {
        Ok(Command::ToggleMute)
    } else if line.contains(KEY_INIT) {
        Ok(Command::Init)
    } else if line.is_empty() {
        Ok(Command::Poll)
    } else {
        line.parse::<i32>()
            .map(Command::SetVolume)
            .map_err(|_| Error::MalformedCommand(line.to_string()))
    }
}

pub fn encode_frame(field: &str, value: impl std::fmt::Display) -> String {
    format!("{field}:{value}{DELIMITER}")
}

/// `VOL:<percent>#APP:<label>#`
pub fn encode_state(volume_percent: u8, label: &str) -> String {
    let mut out = encode_frame(FIELD_VOLUME, volume_percent);
    out.push_str(&encode_frame(FIELD_APP, label));
    out
}

pub fn to_percent(volume: f32) -> u8 {
    (volume * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn from_percent(percent: i32) -> f32 {
    percent as f32 / 100.0
}
