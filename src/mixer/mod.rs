//! Selection state and volume/mute control over the host's audio targets.

mod catalog;
mod control;
mod cursor;

pub use catalog::{Catalog, ProcessEntry};
pub use control::display_name;
pub use cursor::{next_target, previous_target, Selection, Target};

use crate::audio::AudioProvider;
use crate::error::Result;

/// The audio provider together with the active selection.
///
/// Every operation re-reads the session list, so the selection may point at
/// a process that has since exited; those operations return `TargetGone`
/// and leave recovery to the caller.
pub struct Mixer<P> {
    provider: P,
    selection: Selection,
}

impl<P: AudioProvider> Mixer<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            selection: Selection::new(),
        }
    }

    pub fn active(&self) -> Target {
        self.selection.active()
    }

    #[cfg(test)]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    #[cfg(test)]
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Select the next target, wrapping to `Master` after the last process.
    pub fn advance(&mut self) -> Result<Target> {
        let catalog = Catalog::fetch(&self.provider)?;
        let target = self.selection.advance(&catalog);
        log::info!("Selected {target}");
        Ok(target)
    }

    /// Select the previous target, wrapping to the last process before `Master`.
    pub fn retreat(&mut self) -> Result<Target> {
        let catalog = Catalog::fetch(&self.provider)?;
        let target = self.selection.retreat(&catalog);
        log::info!("Selected {target}");
        Ok(target)
    }

    pub fn reset(&mut self) {
        self.selection.reset();
    }
}
