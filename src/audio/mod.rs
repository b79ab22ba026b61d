mod session;
mod backend;
pub mod platform;
#[cfg(test)]
pub mod mock;

pub use session::RawSession;
pub use backend::AudioProvider;
pub use platform::{create_provider, PlatformProvider};
