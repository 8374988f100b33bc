//! MedPulse Core — shared error type and configuration.

pub mod config;
pub mod error;

pub use config::{DataPaths, MedPulseConfig};
pub use error::{Error, Result};

/// Current time in epoch milliseconds, the timestamp unit used throughout
/// the store schema.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
