//! Analog temperature sensor (TMP36-style, 10 mV/°C, 500 mV at 0 °C).
//!
//! The conversion is a straight line through the sensor's transfer
//! function on a 5 V / 10-bit reference.  There is no clamping: a
//! disconnected or shorted sensor produces an implausible temperature
//! which the fan rule then acts on.

const V_REF: f32 = 5.0;
const ADC_MAX: f32 = 1023.0;
const OFFSET_V: f32 = 0.5;
const DEG_PER_V: f32 = 100.0;

/// Convert a raw ADC count to degrees Celsius.
///
/// Takes `f32` so fractional counts (averaged or simulated) convert with
/// the same formula as integer samples.
pub fn adc_to_celsius(raw: f32) -> f32 {
    (raw * (V_REF / ADC_MAX) - OFFSET_V) * DEG_PER_V
}
