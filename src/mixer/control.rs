use super::{Catalog, Mixer, Target};
use crate::audio::AudioProvider;
use crate::error::{Error, Result};

/// Where the active target's volume actually lives.
enum Endpoint<H> {
    Master,
    Session(H),
    /// System sounds is selected but the host lists no process-less session.
    /// Reads as silent and unmuted, writes are dropped.
    Detached,
}

/// Turns an executable name into a display label: `spotify.exe` -> `Spotify`.
pub fn display_name(process_name: Option<&str>, pid: u32) -> String {
    let Some(name) = process_name else {
        return format!("Process {pid}");
    };
    let stem = match name.len().checked_sub(4) {
        Some(cut) if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(".exe") => {
            &name[..cut]
        }
        _ => name,
    };
    title_case(stem)
}

/// Upper-cases the first letter of every run of letters, lower-cases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

impl<P: AudioProvider> Mixer<P> {
    fn resolve(&self) -> Result<Endpoint<P::Handle>> {
        match self.active() {
            Target::Master => Ok(Endpoint::Master),
            Target::SystemSounds => Ok(Catalog::fetch(&self.provider)?
                .system_sounds
                .map_or(Endpoint::Detached, Endpoint::Session)),
            Target::Process(pid) => Catalog::fetch(&self.provider)?
                .processes
                .into_iter()
                .find(|p| p.pid == pid)
                .map(|p| Endpoint::Session(p.handle))
                .ok_or(Error::TargetGone(Target::Process(pid))),
        }
    }

    fn endpoint_muted(&self, endpoint: &Endpoint<P::Handle>) -> Result<bool> {
        match endpoint {
            Endpoint::Master => self.provider.get_master_mute(),
            Endpoint::Session(h) => self.provider.get_session_mute(h),
            Endpoint::Detached => Ok(false),
        }
    }

    fn set_endpoint_muted(&mut self, endpoint: &Endpoint<P::Handle>, muted: bool) -> Result<()> {
        match endpoint {
            Endpoint::Master => self.provider.set_master_mute(muted),
            Endpoint::Session(h) => self.provider.set_session_mute(h, muted),
            Endpoint::Detached => {
                log::debug!("No system sounds session, ignoring mute");
                Ok(())
            }
        }
    }

    /// Volume of the active target in `0.0..=1.0`; `0.0` while muted.
    pub fn volume(&self) -> Result<f32> {
        let endpoint = self.resolve()?;
        if self.endpoint_muted(&endpoint)? {
            return Ok(0.0);
        }
        match &endpoint {
            Endpoint::Master => self.provider.get_master_volume(),
            Endpoint::Session(h) => self.provider.get_session_volume(h),
            Endpoint::Detached => Ok(0.0),
        }
    }

    /// Sets the active target's volume, clamped to `0.0..=1.0`.
    /// Touching the volume always un-mutes.
    pub fn set_volume(&mut self, volume: f32) -> Result<()> {
        let endpoint = self.resolve()?;
        if self.endpoint_muted(&endpoint)? {
            self.set_endpoint_muted(&endpoint, false)?;
        }
        let volume = volume.clamp(0.0, 1.0);
        match &endpoint {
            Endpoint::Master => self.provider.set_master_volume(volume),
            Endpoint::Session(h) => self.provider.set_session_volume(h, volume),
            Endpoint::Detached => {
                log::debug!("No system sounds session, ignoring volume");
                Ok(())
            }
        }
    }

    pub fn is_muted(&self) -> Result<bool> {
        let endpoint = self.resolve()?;
        self.endpoint_muted(&endpoint)
    }

    /// Mutes or un-mutes without touching the stored volume.
    pub fn set_mute(&mut self, muted: bool) -> Result<()> {
        let endpoint = self.resolve()?;
        self.set_endpoint_muted(&endpoint, muted)
    }

    /// Flips the mute flag and returns the state read back afterwards.
    pub fn toggle_mute(&mut self) -> Result<bool> {
        let endpoint = self.resolve()?;
        let muted = !self.endpoint_muted(&endpoint)?;
        self.set_endpoint_muted(&endpoint, muted)?;
        self.endpoint_muted(&endpoint)
    }

    pub fn label(&self) -> Result<String> {
        match self.active() {
            Target::Master => Ok("Master".to_string()),
            Target::SystemSounds => Ok("System Sounds".to_string()),
            Target::Process(pid) => Catalog::fetch(&self.provider)?
                .find(pid)
                .map(|p| display_name(p.name.as_deref(), pid))
                .ok_or(Error::TargetGone(Target::Process(pid))),
        }
    }
}
