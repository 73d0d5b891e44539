//! System configuration parameters
//!
//! All tunable parameters for the Homewatch controller.  Defaults match the
//! shipped hardware; a JSON document may override any subset of them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pins;

/// Largest count the 10-bit analog scale can report.
pub const ADC_FULL_SCALE: u16 = 1023;

/// Sensor and actuator wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinMap {
    /// ADC channel of the light-dependent resistor.
    pub ldr_channel: u8,
    /// ADC channel of the temperature sensor.
    pub temp_channel: u8,
    /// ADC channel of the gas sensor.
    pub gas_channel: u8,
    /// PIR motion input.
    pub pir_pin: u8,
    /// Alarm reset button input (active-low).
    pub button_pin: u8,
    /// Light relay output.
    pub relay_pin: u8,
    /// Fan output.
    pub fan_pin: u8,
    /// Buzzer output.
    pub alarm_pin: u8,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            ldr_channel: pins::LDR_ADC_CHANNEL,
            temp_channel: pins::TEMP_ADC_CHANNEL,
            gas_channel: pins::GAS_ADC_CHANNEL,
            pir_pin: pins::PIR_GPIO,
            button_pin: pins::BUTTON_GPIO,
            relay_pin: pins::RELAY_GPIO,
            fan_pin: pins::FAN_GPIO,
            alarm_pin: pins::ALARM_GPIO,
        }
    }
}

/// Core monitoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    // --- Thresholds ---
    /// Raw LDR count above which the light relay is switched on.
    pub light_threshold: u16,
    /// Temperature (°C) above which the fan runs.
    pub max_temp_c: f32,
    /// Raw gas sensor count above which the gas alarm sounds.
    pub gas_threshold: u16,

    // --- Alarm ---
    /// Buzzer frequency for both alarms (Hz).
    pub alarm_tone_hz: u32,

    // --- Timing ---
    /// Pause after each phase of the monitoring cycle (milliseconds).
    pub phase_delay_ms: u32,
    /// How long a notification stays on the display (milliseconds).
    pub notify_hold_ms: u32,
    /// How long the start-up banner stays on the display (milliseconds).
    pub startup_hold_ms: u32,

    // --- Wiring ---
    pub pins: PinMap,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            // Thresholds
            light_threshold: 500,
            max_temp_c: 32.0,
            gas_threshold: 600,

            // Alarm
            alarm_tone_hz: 1000,

            // Timing
            phase_delay_ms: 1000,
            notify_hold_ms: 2000,
            startup_hold_ms: 1000,

            pins: PinMap::default(),
        }
    }
}

impl MonitorConfig {
    /// Parse a JSON override.  Missing fields keep their defaults; the
    /// result is validated before it is returned.
    pub fn from_json(doc: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(doc).map_err(|e| {
            log::warn!("config parse failed: {}", e);
            ConfigError::Malformed
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would make the controller misbehave.  Values are
    /// rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.light_threshold >= ADC_FULL_SCALE {
            return Err(ConfigError::ValidationFailed(
                "light_threshold must be below ADC full scale",
            ));
        }
        if self.gas_threshold >= ADC_FULL_SCALE {
            return Err(ConfigError::ValidationFailed(
                "gas_threshold must be below ADC full scale",
            ));
        }
        if !self.max_temp_c.is_finite() {
            return Err(ConfigError::ValidationFailed("max_temp_c must be finite"));
        }
        if !(20..=20_000).contains(&self.alarm_tone_hz) {
            return Err(ConfigError::ValidationFailed(
                "alarm_tone_hz must be within 20..=20000",
            ));
        }
        let p = &self.pins;
        if [p.ldr_channel, p.temp_channel, p.gas_channel]
            .iter()
            .any(|&ch| ch >= pins::ADC1_CHANNELS)
        {
            return Err(ConfigError::ValidationFailed("ADC channel out of range"));
        }
        if [p.pir_pin, p.button_pin, p.relay_pin, p.fan_pin, p.alarm_pin]
            .iter()
            .any(|&pin| pin > pins::MAX_GPIO)
        {
            return Err(ConfigError::ValidationFailed("GPIO number out of range"));
        }
        if p.relay_pin == p.fan_pin || p.relay_pin == p.alarm_pin || p.fan_pin == p.alarm_pin {
            return Err(ConfigError::ValidationFailed("output pins must be distinct"));
        }
        if p.pir_pin == p.button_pin {
            return Err(ConfigError::ValidationFailed("input pins must be distinct"));
        }
        Ok(())
    }
}
