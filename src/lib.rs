//! dialflow — drive per-application volume from a serial rotary controller.
//!
//! The controller cycles through the master output, system sounds and every
//! process currently playing audio, and sets or mutes whichever one is
//! selected. The host keeps the controller's display in sync.

pub mod audio;
pub mod comms;
pub mod driver;
pub mod error;
pub mod mixer;
pub mod utils;

pub use error::{Error, Result};
