//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, display, event sinks) implement these
//! traits.  The [`MonitorService`](super::service::MonitorService) consumes
//! them via generics, so the domain core never touches hardware directly.
//!
//! Blocking delays are not a port of their own: the service takes any
//! [`embedded_hal::delay::DelayNs`], which both the ESP-IDF HAL and the test
//! doubles implement.
//!
//! All ports are infallible.  Adapters log driver failures and carry on.

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to sample inputs.
pub trait SensorPort {
    /// Raw ADC count on the 0 – 1023 scale.
    fn read_analog(&mut self, channel: u8) -> u16;

    /// Logic level of a digital input (`true` = HIGH).
    fn read_digital(&mut self, pin: u8) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command outputs.
pub trait ActuatorPort {
    /// Drive a digital output (`true` = HIGH).
    fn write_digital(&mut self, pin: u8, high: bool);

    /// Start a square-wave tone on `pin`.  Replaces any tone already playing.
    fn set_tone(&mut self, pin: u8, freq_hz: u32);

    /// Silence the tone on `pin`.
    fn clear_tone(&mut self, pin: u8);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → character display)
// ───────────────────────────────────────────────────────────────

/// Two-line character display.
pub trait DisplayPort {
    /// Blank the display and home the cursor.
    fn clear(&mut self);

    /// Move the cursor to `col` on `row` (0-based).
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Print `text` at the cursor.
    fn print(&mut self, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
