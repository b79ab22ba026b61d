use crate::audio::{AudioProvider, RawSession};
use crate::error::{Error, Result};

/// Placeholder for hosts without a per-application volume backend.
/// Construction always fails, so the remaining methods are never reached.
pub struct UnsupportedAudioProvider;

impl UnsupportedAudioProvider {
    pub fn new() -> Result<Self> {
        // TODO: PulseAudio/PipeWire sink-input backend for Linux
        Err(Error::ProviderUnavailable(format!(
            "no audio backend for {}",
            std::env::consts::OS
        )))
    }
}

impl AudioProvider for UnsupportedAudioProvider {
    type Handle = ();

    fn list_raw_sessions(&self) -> Result<Vec<RawSession<()>>> {
        Ok(Vec::new())
    }

    fn get_master_volume(&self) -> Result<f32> {
        Ok(0.0)
    }

    fn set_master_volume(&mut self, _volume: f32) -> Result<()> {
        Ok(())
    }

    fn get_master_mute(&self) -> Result<bool> {
        Ok(false)
    }

    fn set_master_mute(&mut self, _muted: bool) -> Result<()> {
        Ok(())
    }

    fn get_session_volume(&self, _session: &()) -> Result<f32> {
        Ok(0.0)
    }

    fn set_session_volume(&mut self, _session: &(), _volume: f32) -> Result<()> {
        Ok(())
    }

    fn get_session_mute(&self, _session: &()) -> Result<bool> {
        Ok(false)
    }

    fn set_session_mute(&mut self, _session: &(), _muted: bool) -> Result<()> {
        Ok(())
    }
}
