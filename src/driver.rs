//! Main control loop: reads one line at a time from the controller and keeps
//! its display in step with the active target.

use std::time::Duration;

use crate::audio::AudioProvider;
use crate::comms::protocol::{self, Command, FIELD_VOLUME};
use crate::comms::transport::Transport;
use crate::error::{Error, Result};
use crate::mixer::Mixer;

pub struct Driver<P, T> {
    mixer: Mixer<P>,
    transport: T,
    read_timeout: Duration,
    /// Last volume reported by a polling tick, to avoid repeating it.
    last_polled: Option<u8>,
}

impl<P: AudioProvider, T: Transport> Driver<P, T> {
    pub fn new(provider: P, transport: T, read_timeout: Duration) -> Self {
        Self {
            mixer: Mixer::new(provider),
            transport,
            read_timeout,
            last_polled: None,
        }
    }

    /// Sends the initial state and then serves the controller until the
    /// link fails.
    pub fn run(&mut self) -> Result<()> {
        let sent = self.send_state();
        self.absorb(sent)?;

        loop {
            let line = self.transport.read_line(self.read_timeout)?;
            self.step(&line)?;
        }
    }

    /// Handles one incoming line. Only transport failures are returned.
    pub fn step(&mut self, line: &str) -> Result<()> {
        let result = self.dispatch(line);
        self.absorb(result)
    }

    fn dispatch(&mut self, line: &str) -> Result<()> {
        let command = protocol::decode(line)?;
        if command != Command::Poll {
            log::debug!("Incoming: {line:?} -> {command:?}");
        }

        match command {
            Command::Next => {
                self.mixer.advance()?;
                self.last_polled = None;
                self.send_state()
            }
            Command::Previous => {
                self.mixer.retreat()?;
                self.last_polled = None;
                self.send_state()
            }
            Command::ToggleMute => {
                let muted = self.mixer.toggle_mute()?;
                log::info!("{} {}", self.mixer.active(), if muted { "muted" } else { "unmuted" });
                let volume = protocol::to_percent(self.mixer.volume()?);
                self.send_volume(volume)?;
                self.last_polled = Some(volume);
                Ok(())
            }
            Command::Init => self.send_state(),
            Command::SetVolume(percent) => self.mixer.set_volume(protocol::from_percent(percent)),
            Command::Poll => {
                let volume = protocol::to_percent(self.mixer.volume()?);
                if self.last_polled != Some(volume) {
                    self.send_volume(volume)?;
                    self.last_polled = Some(volume);
                }
                Ok(())
            }
        }
    }

    /// Recovers from everything except transport failures.
    fn absorb(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Err(Error::TargetGone(target)) => {
                log::info!("{target} has no audio session anymore, selecting master");
                self.mixer.reset();
                self.last_polled = None;
                // Master cannot go away, so this recurses at most once
                let resent = self.send_state();
                self.absorb(resent)
            }
            Err(Error::MalformedCommand(line)) => {
                log::warn!("Ignoring malformed command {line:?}");
                Ok(())
            }
            Err(Error::Provider(msg)) => {
                log::warn!("Audio call failed: {msg}");
                Ok(())
            }
            other => other,
        }
    }

    fn send_state(&mut self) -> Result<()> {
        let volume = protocol::to_percent(self.mixer.volume()?);
        let label = self.mixer.label()?;
        self.transport
            .write(protocol::encode_state(volume, &label).as_bytes())
    }

    fn send_volume(&mut self, volume: u8) -> Result<()> {
        self.transport
            .write(protocol::encode_frame(FIELD_VOLUME, volume).as_bytes())
    }
}
