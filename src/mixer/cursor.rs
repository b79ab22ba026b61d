use std::fmt;

use super::catalog::Catalog;

/// Something the dial can control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Output device master volume.
    Master,
    /// The session with no owning process.
    SystemSounds,
    /// First audio session of a running process.
    Process(u32),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Master => write!(f, "master"),
            Target::SystemSounds => write!(f, "system sounds"),
            Target::Process(pid) => write!(f, "process {pid}"),
        }
    }
}

/// Walks `Master, SystemSounds, Process(p1), .., Process(pn)` forwards,
/// wrapping back to `Master`. A pid missing from `catalog` also lands on `Master`.
pub fn next_target<H>(current: Target, catalog: &Catalog<H>) -> Target {
    match current {
        Target::Master => Target::SystemSounds,
        Target::SystemSounds => catalog
            .processes
            .first()
            .map_or(Target::Master, |p| Target::Process(p.pid)),
        Target::Process(pid) => catalog
            .position(pid)
            .and_then(|i| catalog.processes.get(i + 1))
            .map_or(Target::Master, |p| Target::Process(p.pid)),
    }
}

/// Mirror of [`next_target`].
pub fn previous_target<H>(current: Target, catalog: &Catalog<H>) -> Target {
    match current {
        Target::Master => catalog
            .processes
            .last()
            .map_or(Target::SystemSounds, |p| Target::Process(p.pid)),
        Target::SystemSounds => Target::Master,
        Target::Process(pid) => match catalog.position(pid) {
            Some(0) => Target::SystemSounds,
            Some(i) => Target::Process(catalog.processes[i - 1].pid),
            None => Target::Master,
        },
    }
}

/// The single active selection. Starts at `Master`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    active: Target,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    pub fn new() -> Self {
        Self {
            active: Target::Master,
        }
    }

    pub fn active(&self) -> Target {
        self.active
    }

    pub fn advance<H>(&mut self, catalog: &Catalog<H>) -> Target {
        self.active = next_target(self.active, catalog);
        self.active
    }

    pub fn retreat<H>(&mut self, catalog: &Catalog<H>) -> Target {
        self.active = previous_target(self.active, catalog);
        self.active
    }

    pub fn reset(&mut self) {
        self.active = Target::Master;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RawSession;

    fn catalog(pids: &[u32]) -> Catalog<()> {
        let mut sessions = vec![RawSession::new(None, None, ())];
        sessions.extend(pids.iter().map(|&p| RawSession::new(Some(p), None, ())));
        Catalog::from_sessions(sessions)
    }

    #[test]
    fn starts_at_master() {
        assert_eq!(Selection::new().active(), Target::Master);
    }

    #[test]
    fn advance_then_retreat_returns_to_master() {
        for pids in [&[][..], &[1, 2, 3][..]] {
            let catalog = catalog(pids);
            let mut sel = Selection::new();
            sel.advance(&catalog);
            sel.retreat(&catalog);
            assert_eq!(sel.active(), Target::Master);
        }
    }

    #[test]
    fn advance_walks_and_wraps() {
        let catalog = catalog(&[100, 200]);
        let mut sel = Selection::new();

        assert_eq!(sel.advance(&catalog), Target::SystemSounds);
        assert_eq!(sel.advance(&catalog), Target::Process(100));
        assert_eq!(sel.advance(&catalog), Target::Process(200));
        assert_eq!(sel.advance(&catalog), Target::Master);
    }

    #[test]
    fn advance_from_system_sounds_with_no_processes_wraps() {
        let catalog = catalog(&[]);
        assert_eq!(next_target(Target::SystemSounds, &catalog), Target::Master);
    }

    #[test]
    fn retreat_walks_and_wraps() {
        let catalog = catalog(&[100, 200]);
        let mut sel = Selection::new();

        assert_eq!(sel.retreat(&catalog), Target::Process(200));
        assert_eq!(sel.retreat(&catalog), Target::Process(100));
        assert_eq!(sel.retreat(&catalog), Target::SystemSounds);
        assert_eq!(sel.retreat(&catalog), Target::Master);
    }

    #[test]
    fn retreat_from_master_with_no_processes_lands_on_system_sounds() {
        let catalog = catalog(&[]);
        assert_eq!(previous_target(Target::Master, &catalog), Target::SystemSounds);
    }

    #[test]
    fn vanished_pid_falls_back_to_master() {
        let catalog = catalog(&[1, 2]);
        assert_eq!(next_target(Target::Process(42), &catalog), Target::Master);
        assert_eq!(previous_target(Target::Process(42), &catalog), Target::Master);
    }

    #[test]
    fn cursor_follows_catalog_changes() {
        let mut sel = Selection::new();
        sel.retreat(&catalog(&[1, 2]));
        assert_eq!(sel.active(), Target::Process(2));

        // A new process appeared after 2
        assert_eq!(sel.advance(&catalog(&[1, 2, 3])), Target::Process(3));
    }

    #[test]
    fn reset_returns_to_master() {
        let mut sel = Selection::new();
        sel.advance(&catalog(&[]));
        sel.reset();
        assert_eq!(sel.active(), Target::Master);
    }
}
