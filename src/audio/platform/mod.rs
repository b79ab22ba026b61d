#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub mod unsupported;

use crate::error::Result;

#[cfg(target_os = "windows")]
pub type PlatformProvider = windows::WindowsAudioProvider;

#[cfg(not(target_os = "windows"))]
pub type PlatformProvider = unsupported::UnsupportedAudioProvider;

pub fn create_provider() -> Result<PlatformProvider> {
    PlatformProvider::new()
}
