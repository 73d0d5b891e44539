//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART console in production).  This is the controller's
//! serial diagnostics channel.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | monitoring loop running");
            }
            AppEvent::ConditionChanged { condition, active } => {
                info!("COND  | {} -> {}", condition, if *active { "ON" } else { "OFF" });
            }
            AppEvent::Notified(note) => {
                info!("NOTIFY| {}", note);
            }
            AppEvent::CycleCompleted(r) => {
                info!(
                    "TELEM | cycle={} | light={} T={:.1}\u{00b0}C gas={} | motion={} button={} | \
                     lights={} fan={} alarm={} gas_alarm={} | notes={}",
                    r.cycle,
                    r.readings.light_raw,
                    r.readings.temperature_c,
                    r.readings.gas_raw,
                    r.readings.motion_detected,
                    r.readings.button_pressed,
                    r.conditions.light_on,
                    r.conditions.fan_on,
                    r.conditions.motion_alarm,
                    r.conditions.gas_alarm,
                    r.notifications,
                );
            }
        }
    }
}
