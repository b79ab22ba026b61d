//! In-memory audio backend for tests.

use crate::audio::{AudioProvider, RawSession};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct MockSession {
    id: usize,
    process_id: Option<u32>,
    process_name: Option<String>,
    volume: f32,
    muted: bool,
}

#[derive(Debug, Default)]
pub struct MockProvider {
    master_volume: f32,
    master_muted: bool,
    sessions: Vec<MockSession>,
    next_id: usize,
    pub fail_calls: bool,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            master_volume: 0.5,
            ..Default::default()
        }
    }

    /// Adds the process-less system sounds session.
    pub fn with_system_sounds(mut self) -> Self {
        self.push(None, None);
        self
    }

    pub fn with_process(mut self, pid: u32, name: &str) -> Self {
        self.push(Some(pid), Some(name.to_string()));
        self
    }

    pub fn push(&mut self, process_id: Option<u32>, process_name: Option<String>) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.sessions.push(MockSession {
            id,
            process_id,
            process_name,
            volume: 1.0,
            muted: false,
        });
        id
    }

    /// Drops every session owned by `pid`, as if the process exited.
    pub fn exit(&mut self, pid: u32) {
        self.sessions.retain(|s| s.process_id != Some(pid));
    }

    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    pub fn master_muted(&self) -> bool {
        self.master_muted
    }

    /// Volume of the first session owned by `pid`.
    pub fn process_volume(&self, pid: u32) -> Option<f32> {
        self.sessions
            .iter()
            .find(|s| s.process_id == Some(pid))
            .map(|s| s.volume)
    }

    pub fn session_volume_by_id(&self, id: usize) -> Option<f32> {
        self.session(&id).ok().map(|s| s.volume)
    }

    fn check(&self) -> Result<()> {
        if self.fail_calls {
            return Err(Error::Provider("mock failure".into()));
        }
        Ok(())
    }

    fn session(&self, id: &usize) -> Result<&MockSession> {
        self.check()?;
        self.sessions
            .iter()
            .find(|s| s.id == *id)
            .ok_or_else(|| Error::Provider(format!("stale session {id}")))
    }

    fn session_mut(&mut self, id: &usize) -> Result<&mut MockSession> {
        self.check()?;
        self.sessions
            .iter_mut()
            .find(|s| s.id == *id)
            .ok_or_else(|| Error::Provider(format!("stale session {id}")))
    }
}

impl AudioProvider for MockProvider {
    type Handle = usize;

    fn list_raw_sessions(&self) -> Result<Vec<RawSession<usize>>> {
        self.check()?;
        Ok(self
            .sessions
            .iter()
            .map(|s| RawSession::new(s.process_id, s.process_name.clone(), s.id))
            .collect())
    }

    fn get_master_volume(&self) -> Result<f32> {
        self.check()?;
        Ok(self.master_volume)
    }

    fn set_master_volume(&mut self, volume: f32) -> Result<()> {
        self.check()?;
        self.master_volume = volume;
        Ok(())
    }

    fn get_master_mute(&self) -> Result<bool> {
        self.check()?;
        Ok(self.master_muted)
    }

    fn set_master_mute(&mut self, muted: bool) -> Result<()> {
        self.check()?;
        self.master_muted = muted;
        Ok(())
    }

    fn get_session_volume(&self, session: &usize) -> Result<f32> {
        Ok(self.session(session)?.volume)
    }

    fn set_session_volume(&mut self, session: &usize, volume: f32) -> Result<()> {
        self.session_mut(session)?.volume = volume;
        Ok(())
    }

    fn get_session_mute(&self, session: &usize) -> Result<bool> {
        Ok(self.session(session)?.muted)
    }

    fn set_session_mute(&mut self, session: &usize, muted: bool) -> Result<()> {
        self.session_mut(session)?.muted = muted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_all_sessions_mute_touches_every_session() {
        let mut provider = MockProvider::new()
            .with_system_sounds()
            .with_process(5, "a.exe")
            .with_process(7, "b.exe");

        provider.set_all_sessions_mute(true).unwrap();

        for session in provider.list_raw_sessions().unwrap() {
            assert!(provider.get_session_mute(&session.handle).unwrap());
        }
        assert!(!provider.master_muted());
    }
}
