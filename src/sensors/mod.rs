//! Sensor acquisition — one [`SensorSnapshot`] per monitoring cycle.
//!
//! Every sensor is read exactly once at the top of the cycle, in wiring
//! order: light, temperature, button, motion, gas.  The snapshot is then
//! used unchanged by all phases, even though the phases are seconds apart.

pub mod temperature;

use crate::app::ports::SensorPort;
use crate::config::PinMap;

/// A point-in-time snapshot of every sensor in the system.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorSnapshot {
    /// Raw LDR count (0 – 1023).
    pub light_raw: u16,
    /// Raw temperature sensor count (0 – 1023).
    pub temp_raw: u16,
    /// Temperature derived from `temp_raw` (°C, unclamped).
    pub temperature_c: f32,
    /// Alarm reset button is held down.
    pub button_pressed: bool,
    /// PIR reports motion.
    pub motion_detected: bool,
    /// Raw gas sensor count (0 – 1023).
    pub gas_raw: u16,
}

impl SensorSnapshot {
    /// Read every sensor through `port`.
    pub fn read(port: &mut impl SensorPort, pins: &PinMap) -> Self {
        let light_raw = port.read_analog(pins.ldr_channel);
        let temp_raw = port.read_analog(pins.temp_channel);
        // Active-low with pull-up: a LOW level means the button is down.
        let button_pressed = !port.read_digital(pins.button_pin);
        let motion_detected = port.read_digital(pins.pir_pin);
        let gas_raw = port.read_analog(pins.gas_channel);

        Self {
            light_raw,
            temp_raw,
            temperature_c: temperature::adc_to_celsius(f32::from(temp_raw)),
            button_pressed,
            motion_detected,
            gas_raw,
        }
    }
}
