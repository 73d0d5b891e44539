//! Display notifications — the two-line messages shown on a state change.
//!
//! Lines are fixed-capacity [`heapless::String`]s so the monitoring loop
//! never allocates.  Text longer than [`LINE_CAP`] bytes is cut at the last
//! whole character that fits; the LCD driver clips to its own width.

use core::fmt::{self, Write};

use heapless::String;

use crate::control::{Condition, Edge};

/// Byte capacity of one notification line.
pub const LINE_CAP: usize = 32;

/// One display line.
pub type Line = String<LINE_CAP>;

/// Shown on line 1 while the controller boots.
pub const STARTUP_BANNER: &str = "Initializing...";

/// A two-line display message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub line1: Line,
    pub line2: Line,
}

impl Notification {
    pub fn new(line1: &str, line2: &str) -> Self {
        Self {
            line1: fit(line1),
            line2: fit(line2),
        }
    }

    /// "Lights" / "on!" or "off!"
    pub fn lights(on: bool) -> Self {
        Self::new("Lights", if on { "on!" } else { "off!" })
    }

    /// "Fan on!" / "Fan off!" with the temperature that caused it.
    pub fn fan(on: bool, temperature_c: f32) -> Self {
        Self {
            line1: fit(if on { "Fan on!" } else { "Fan off!" }),
            line2: celsius(temperature_c),
        }
    }

    /// "Alarm" / "on!" or "off!"
    pub fn motion_alarm(on: bool) -> Self {
        Self::new("Alarm", if on { "on!" } else { "off!" })
    }

    /// "Alert" / "gas detected." or "Gas alert" / "off."
    pub fn gas_alarm(on: bool) -> Self {
        if on {
            Self::new("Alert", "gas detected.")
        } else {
            Self::new("Gas alert", "off.")
        }
    }

    /// The message for `condition` crossing `edge`.  `temperature_c` is only
    /// used by the fan message.
    pub fn for_edge(condition: Condition, edge: Edge, temperature_c: f32) -> Self {
        let on = edge.is_active();
        match condition {
            Condition::Light => Self::lights(on),
            Condition::Fan => Self::fan(on, temperature_c),
            Condition::MotionAlarm => Self::motion_alarm(on),
            Condition::GasAlarm => Self::gas_alarm(on),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.line1, self.line2)
    }
}

/// Copy `text` into a line, dropping whole characters that do not fit.
fn fit(text: &str) -> Line {
    let mut line = Line::new();
    for ch in text.chars() {
        if line.push(ch).is_err() {
            break;
        }
    }
    line
}

/// One decimal place and a degree-Celsius suffix, e.g. `35.0 °C`.
fn celsius(temperature_c: f32) -> Line {
    let mut line = Line::new();
    if write!(line, "{:.1} \u{00b0}C", temperature_c).is_err() {
        log::warn!("temperature {} does not fit a display line", temperature_c);
    }
    line
}
