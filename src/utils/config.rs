use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

// ── Settings ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Serial port name; discovered when unset.
    pub port: Option<String>,
    pub baud_rate: u32,
    /// How long a read waits before the loop polls the volume instead.
    pub read_timeout_ms: u64,
    /// Settle time after opening the port (the board resets on DTR).
    pub boot_wait_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: None,
            baud_rate: 9600,
            read_timeout_ms: 20,
            boot_wait_ms: 2000,
        }
    }
}

impl Config {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

pub fn load_config() -> Config {
    let path = config_path();
    match std::fs::read_to_string(&path) {
        Ok(contents) => parse_config(&contents),
        Err(_) => {
            log::info!("No config at {:?}, using defaults", path);
            Config::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Config {
    toml::from_str(contents).unwrap_or_else(|e| {
        log::warn!("Failed to parse config: {e}. Using defaults.");
        Config::default()
    })
}

// ── Internal ──────────────────────────────────────────────────────────────────

fn config_path() -> PathBuf {
    let mut p = std::env::current_exe().unwrap_or_default();
    p.set_file_name("dialflow.toml");
    p
}
