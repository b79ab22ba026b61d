// src/audio/platform/windows.rs
use crate::audio::{AudioProvider, RawSession};
use crate::error::{Error, Result};
use windows::core::GUID;
use windows::core::Interface;
use windows::core::PWSTR;
use windows::Win32::Foundation::*;
use windows::Win32::Media::Audio::Endpoints::IAudioEndpointVolume;
use windows::Win32::Media::Audio::*;
use windows::Win32::System::Com::*;
use windows::Win32::System::Threading::*;

/// Event context stamped on every change we make, so other listeners can
/// tell our writes apart from the user's.
static DIALFLOW_CONTEXT_GUID: GUID = GUID::from_u128(0x5d1a1f10_7c3e_4b8a_9f2e_0d1a1f10c0de);

impl From<windows::core::Error> for Error {
    fn from(e: windows::core::Error) -> Self {
        Error::Provider(e.to_string())
    }
}

/// Executable file name (e.g. `spotify.exe`) for a running process.
fn get_process_name(pid: u32) -> Option<String> {
    unsafe {
        let handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid).ok()?;
        let mut buffer = [0u16; MAX_PATH as usize];
        let mut size = buffer.len() as u32;
        let pwstr = PWSTR(buffer.as_mut_ptr());

        let result = QueryFullProcessImageNameW(handle, PROCESS_NAME_WIN32, pwstr, &mut size);
        let _ = CloseHandle(handle);
        result.ok()?;

        let full_path = String::from_utf16_lossy(&buffer[..size as usize]);
        full_path.rsplit('\\').next().map(str::to_string)
    }
}

/// Owner of a session: `Some(None)` for the system sounds session (pid 0),
/// `None` when the owner could not be queried.
fn session_owner(process_id: windows::core::Result<u32>) -> Option<Option<u32>> {
    match process_id {
        Ok(0) => Some(None),
        Ok(pid) => Some(Some(pid)),
        Err(_) => None,
    }
}

/// Core Audio backend bound to the default render endpoint.
pub struct WindowsAudioProvider {
    enumerator: IMMDeviceEnumerator,
}

impl WindowsAudioProvider {
    pub fn new() -> Result<Self> {
        unsafe {
            CoInitializeEx(None, COINIT_APARTMENTTHREADED)
                .ok()
                .map_err(|e| Error::ProviderUnavailable(format!("COM init failed: {e}")))?;

            let enumerator: IMMDeviceEnumerator =
                CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL).map_err(|e| {
                    Error::ProviderUnavailable(format!("no device enumerator: {e}"))
                })?;

            // Fail at startup rather than on first use if there is no output
            enumerator
                .GetDefaultAudioEndpoint(eRender, eConsole)
                .map_err(|e| Error::ProviderUnavailable(format!("no output device: {e}")))?;

            Ok(Self { enumerator })
        }
    }

    fn default_device(&self) -> Result<IMMDevice> {
        unsafe { Ok(self.enumerator.GetDefaultAudioEndpoint(eRender, eConsole)?) }
    }

    fn endpoint_volume(&self) -> Result<IAudioEndpointVolume> {
        unsafe { Ok(self.default_device()?.Activate(CLSCTX_ALL, None)?) }
    }
}

impl AudioProvider for WindowsAudioProvider {
    type Handle = ISimpleAudioVolume;

    fn list_raw_sessions(&self) -> Result<Vec<RawSession<ISimpleAudioVolume>>> {
        unsafe {
            let session_manager: IAudioSessionManager2 =
                self.default_device()?.Activate(CLSCTX_ALL, None)?;
            let session_enumerator = session_manager.GetSessionEnumerator()?;
            let count = session_enumerator.GetCount()?;

            let mut sessions = Vec::new();

            for i in 0..count {
                let Ok(session_control) = session_enumerator.GetSession(i) else {
                    continue;
                };
                match session_control.GetState() {
                    Ok(state) if state != AudioSessionStateExpired => {}
                    _ => continue,
                }
                let Ok(session_control2) = session_control.cast::<IAudioSessionControl2>() else {
                    continue;
                };
                let Ok(volume_control) = session_control.cast::<ISimpleAudioVolume>() else {
                    continue;
                };

                let Some(process_id) = session_owner(session_control2.GetProcessId()) else {
                    continue;
                };
                let process_name = process_id.and_then(get_process_name);

                sessions.push(RawSession::new(process_id, process_name, volume_control));
            }

            Ok(sessions)
        }
    }

    fn get_master_volume(&self) -> Result<f32> {
        unsafe { Ok(self.endpoint_volume()?.GetMasterVolumeLevelScalar()?) }
    }

    fn set_master_volume(&mut self, volume: f32) -> Result<()> {
        unsafe {
            self.endpoint_volume()?
                .SetMasterVolumeLevelScalar(volume, &DIALFLOW_CONTEXT_GUID as *const _)?;
        }
        Ok(())
    }

    fn get_master_mute(&self) -> Result<bool> {
        unsafe { Ok(self.endpoint_volume()?.GetMute()?.as_bool()) }
    }

    fn set_master_mute(&mut self, muted: bool) -> Result<()> {
        unsafe {
            self.endpoint_volume()?
                .SetMute(muted, &DIALFLOW_CONTEXT_GUID as *const _)?;
        }
        Ok(())
    }

    fn get_session_volume(&self, session: &ISimpleAudioVolume) -> Result<f32> {
        unsafe { Ok(session.GetMasterVolume()?) }
    }

    fn set_session_volume(&mut self, session: &ISimpleAudioVolume, volume: f32) -> Result<()> {
        unsafe {
            session.SetMasterVolume(volume, &DIALFLOW_CONTEXT_GUID as *const _)?;
        }
        Ok(())
    }

    fn get_session_mute(&self, session: &ISimpleAudioVolume) -> Result<bool> {
        unsafe { Ok(session.GetMute()?.as_bool()) }
    }

    fn set_session_mute(&mut self, session: &ISimpleAudioVolume, muted: bool) -> Result<()> {
        unsafe {
            session.SetMute(muted, &DIALFLOW_CONTEXT_GUID as *const _)?;
        }
        Ok(())
    }
}
