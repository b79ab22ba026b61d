use super::session::RawSession;
use crate::error::Result;

/// Host audio subsystem: session enumeration plus volume and mute access.
///
/// Volumes are scalars in `0.0..=1.0`. All calls are synchronous.
pub trait AudioProvider {
    /// Backend-specific reference to one session.
    type Handle: Clone;

    /// Get all current audio sessions, in the backend's enumeration order
    fn list_raw_sessions(&self) -> Result<Vec<RawSession<Self::Handle>>>;

    fn get_master_volume(&self) -> Result<f32>;

    fn set_master_volume(&mut self, volume: f32) -> Result<()>;

    fn get_master_mute(&self) -> Result<bool>;

    fn set_master_mute(&mut self, muted: bool) -> Result<()>;

    fn get_session_volume(&self, session: &Self::Handle) -> Result<f32>;

    fn set_session_volume(&mut self, session: &Self::Handle, volume: f32) -> Result<()>;

    fn get_session_mute(&self, session: &Self::Handle) -> Result<bool>;

    fn set_session_mute(&mut self, session: &Self::Handle, muted: bool) -> Result<()>;

    /// Set mute state on every session at once
    fn set_all_sessions_mute(&mut self, muted: bool) -> Result<()> {
        for session in self.list_raw_sessions()? {
            self.set_session_mute(&session.handle, muted)?;
        }
        Ok(())
    }
}
