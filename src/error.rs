//! Unified error types for the Homewatch firmware.
//!
//! The monitoring loop itself never fails: sensor values are taken at face
//! value and the hardware ports are infallible.  Errors only arise while
//! bringing the system up (peripherals, display) or loading configuration.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible start-up operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid or could not be parsed.
    Config(ConfigError),
    /// The character display did not respond.
    Display,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Display => write!(f, "display not responding"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from loading or validating a [`MonitorConfig`](crate::config::MonitorConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The override document could not be parsed.
    Malformed,
    /// A field failed range validation.
    /// The `&'static str` names the field and the rule it broke.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed config document"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        match e {
            HwInitError::AdcInitFailed(_) => Self::Init("ADC1"),
            HwInitError::GpioConfigFailed(_) => Self::Init("GPIO"),
            HwInitError::LedcInitFailed(_) => Self::Init("LEDC tone"),
        }
    }
}
