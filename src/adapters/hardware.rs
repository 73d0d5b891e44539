//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the buzzer driver and the display, and routes raw pin access
//! through [`hw_init`].  This is the only module in the system that
//! touches actual hardware.  On non-espidf targets the underlying
//! helpers use cfg-gated simulation stubs.

use log::warn;

use crate::app::ports::{ActuatorPort, DisplayPort, SensorPort};
use crate::drivers::buzzer::Buzzer;
use crate::drivers::hw_init;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<D> {
    buzzer: Buzzer,
    display: D,
}

impl<D> HardwareAdapter<D> {
    pub fn new(buzzer: Buzzer, display: D) -> Self {
        Self { buzzer, display }
    }

    pub fn buzzer(&self) -> &Buzzer {
        &self.buzzer
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<D> SensorPort for HardwareAdapter<D> {
    fn read_analog(&mut self, channel: u8) -> u16 {
        hw_init::adc_read(channel)
    }

    fn read_digital(&mut self, pin: u8) -> bool {
        hw_init::gpio_read(pin)
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<D> ActuatorPort for HardwareAdapter<D> {
    fn write_digital(&mut self, pin: u8, high: bool) {
        hw_init::gpio_write(pin, high);
    }

    fn set_tone(&mut self, pin: u8, freq_hz: u32) {
        if pin != self.buzzer.gpio() {
            warn!("set_tone: no tone channel on GPIO{}", pin);
            return;
        }
        self.buzzer.start(freq_hz);
    }

    fn clear_tone(&mut self, pin: u8) {
        if pin != self.buzzer.gpio() {
            warn!("clear_tone: no tone channel on GPIO{}", pin);
            return;
        }
        self.buzzer.stop();
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<D: DisplayPort> DisplayPort for HardwareAdapter<D> {
    fn clear(&mut self) {
        self.display.clear();
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.display.set_cursor(col, row);
    }

    fn print(&mut self, text: &str) {
        self.display.print(text);
    }
}
