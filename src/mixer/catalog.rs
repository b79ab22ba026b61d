use std::collections::HashSet;

use crate::audio::{AudioProvider, RawSession};
use crate::error::Result;

/// A process that currently owns at least one audio session.
#[derive(Debug, Clone)]
pub struct ProcessEntry<H> {
    pub pid: u32,
    pub name: Option<String>,
    pub handle: H,
}

/// De-duplicated snapshot of the selectable sessions.
///
/// Never cached: take a fresh one for every decision, since sessions come and
/// go underneath us.
#[derive(Debug, Clone)]
pub struct Catalog<H> {
    /// First session without an owning process, wherever the host listed it.
    pub system_sounds: Option<H>,
    /// One entry per pid in enumeration order; first-seen session wins.
    pub processes: Vec<ProcessEntry<H>>,
}

impl<H> Catalog<H> {
    pub fn from_sessions(sessions: Vec<RawSession<H>>) -> Self {
        let mut seen = HashSet::new();
        let mut system_sounds = None;
        let mut processes = Vec::new();

        for session in sessions {
            match session.process_id {
                None => {
                    if system_sounds.is_none() {
                        system_sounds = Some(session.handle);
                    }
                }
                Some(pid) => {
                    if seen.insert(pid) {
                        processes.push(ProcessEntry {
                            pid,
                            name: session.process_name,
                            handle: session.handle,
                        });
                    }
                }
            }
        }

        Self {
            system_sounds,
            processes,
        }
    }

    pub fn fetch<P>(provider: &P) -> Result<Self>
    where
        P: AudioProvider<Handle = H>,
    {
        Ok(Self::from_sessions(provider.list_raw_sessions()?))
    }

    pub fn position(&self, pid: u32) -> Option<usize> {
        self.processes.iter().position(|p| p.pid == pid)
    }

    pub fn find(&self, pid: u32) -> Option<&ProcessEntry<H>> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    #[cfg(test)]
    pub fn pids(&self) -> Vec<u32> {
        self.processes.iter().map(|p| p.pid).collect()
    }
}
