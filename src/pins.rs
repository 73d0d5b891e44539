//! GPIO / ADC assignments for the Homewatch controller board.
//!
//! Single source of truth for the default wiring.  [`PinMap`](crate::config::PinMap)
//! starts from these values; a config override may remap them.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Temperature sensor (TMP36-style, 10 mV/°C with 500 mV offset).
/// ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const TEMP_ADC_CHANNEL: u8 = 0;

/// Light-dependent resistor divider.  Higher count = brighter.
/// ADC1 channel 1 (GPIO 2 on ESP32-S3).
pub const LDR_ADC_CHANNEL: u8 = 1;

/// MQ-series gas sensor analog output.
/// ADC1 channel 3 (GPIO 4 on ESP32-S3).
pub const GAS_ADC_CHANNEL: u8 = 3;

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// PIR motion sensor.  HIGH = motion detected.
pub const PIR_GPIO: u8 = 7;

/// Alarm reset push-button (active-low, internal pull-up).
pub const BUTTON_GPIO: u8 = 8;

// ---------------------------------------------------------------------------
// Actuators
// ---------------------------------------------------------------------------

/// Light relay driver.
pub const RELAY_GPIO: u8 = 5;

/// Fan output (MOSFET gate).  HIGH = fan running.
pub const FAN_GPIO: u8 = 6;

/// Piezo buzzer, driven by LEDC for tone generation.
pub const ALARM_GPIO: u8 = 11;

// ---------------------------------------------------------------------------
// I²C bus (character LCD backpack)
// ---------------------------------------------------------------------------

// SDA = GPIO14, SCL = GPIO15 (typed pins taken in `main`).

/// Highest GPIO number on the ESP32-S3.
pub const MAX_GPIO: u8 = 48;

/// ADC1 exposes channels 0 – 9.
pub const ADC1_CHANNELS: u8 = 10;

/// PCF8574 backpack with A0–A2 tied low.
pub const LCD_I2C_ADDR: u8 = 0x20;

/// I²C bus clock for the LCD backpack (100 kHz standard mode).
pub const I2C_BAUD_HZ: u32 = 100_000;

// ---------------------------------------------------------------------------
// Tone generation
// ---------------------------------------------------------------------------

/// LEDC duty resolution for the buzzer (bits).
pub const TONE_RESOLUTION_BITS: u32 = 10;
