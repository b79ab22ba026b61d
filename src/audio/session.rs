/// One audio stream as enumerated by the host, optionally owned by a process.
#[derive(Debug, Clone)]
pub struct RawSession<H> {
    /// `None` for the process-less system sounds session.
    pub process_id: Option<u32>,
    /// Executable file name, e.g. `spotify.exe`.
    pub process_name: Option<String>,
    pub handle: H,
}

impl<H> RawSession<H> {
    pub fn new(process_id: Option<u32>, process_name: Option<String>, handle: H) -> Self {
        Self {
            process_id,
            process_name,
            handle,
        }
    }
}
