//! Piezo buzzer driver (LEDC square wave).
//!
//! One buzzer serves both alarms.  The driver only tracks what is
//! playing; deciding *when* to sound is the monitoring service's job.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: programs the LEDC tone channel via hw_init.
//! On host/test: hw_init records the frequency in a static atomic.

use log::debug;

use crate::drivers::hw_init;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerState {
    Silent,
    Sounding { freq_hz: u32 },
}

pub struct Buzzer {
    gpio: u8,
    state: BuzzerState,
}

impl Buzzer {
    pub fn new(gpio: u8) -> Self {
        Self {
            gpio,
            state: BuzzerState::Silent,
        }
    }

    /// GPIO the LEDC tone channel is routed to.
    pub fn gpio(&self) -> u8 {
        self.gpio
    }

    /// Start (or retune) the tone.  A zero frequency silences it.
    pub fn start(&mut self, freq_hz: u32) {
        if freq_hz == 0 {
            self.stop();
            return;
        }
        hw_init::tone_start(freq_hz);
        self.state = BuzzerState::Sounding { freq_hz };
        debug!("buzzer GPIO{}: {} Hz", self.gpio, freq_hz);
    }

    pub fn stop(&mut self) {
        hw_init::tone_stop();
        self.state = BuzzerState::Silent;
        debug!("buzzer GPIO{}: silent", self.gpio);
    }

    pub fn state(&self) -> BuzzerState {
        self.state
    }

    pub fn is_sounding(&self) -> bool {
        matches!(self.state, BuzzerState::Sounding { .. })
    }
}
