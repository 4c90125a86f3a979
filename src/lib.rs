//! ONYX-GATE, a pre-boot authentication gateway shell.
//!
//! The gateway currently shows its banner, waits for the user, and logs each
//! step to the console through [`logging::Logger`].
pub mod app;
pub mod error;
pub mod logging;
pub mod screen;

pub use error::LogError;
pub use logging::Logger;
