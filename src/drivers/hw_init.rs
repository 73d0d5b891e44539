//! One-shot hardware peripheral initialization and raw pin access.
//!
//! Configures ADC channels, GPIO directions, and the LEDC tone timer
//! using raw ESP-IDF sys calls.  Called once from `main()` before the
//! monitoring loop starts.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: talks to the real peripherals.
//! On host/test: ADC counts and input levels come from static atomics
//! that tests inject with the `sim_*` functions; output levels and the
//! tone frequency are recorded there too.  Every simulated level starts LOW.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::config::PinMap;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
    LedcInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc)    => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcInitFailed(rc)   => write!(f, "LEDC tone timer/channel config failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

/// ESP32-S3 ADC1 is 12-bit; the monitoring rules work on a 10-bit scale.
const ADC_NATIVE_TO_10BIT_SHIFT: u32 = 2;

#[cfg(target_os = "espidf")]
pub fn init_peripherals(pins: &PinMap) -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the loop; single-threaded.
    unsafe {
        init_adc(pins)?;
        init_gpio_inputs(pins)?;
        init_gpio_outputs(pins)?;
        init_ledc(pins)?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals(_pins: &PinMap) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop ADC read path.  `init_adc()` completes before the loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc(pins: &PinMap) -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for channel in [pins.ldr_channel, pins.temp_channel, pins.gas_channel] {
        let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), channel as u32, &chan_cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }
    }

    info!(
        "hw_init: ADC1 configured (CH{}=LDR, CH{}=temp, CH{}=gas)",
        pins.ldr_channel, pins.temp_channel, pins.gas_channel
    );
    Ok(())
}

/// Sample an ADC1 channel, scaled to 0 – 1023.  A failed read yields 0.
#[cfg(target_os = "espidf")]
pub fn adc_read(channel: u8) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract — single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel as u32, &mut raw) };
    if ret != ESP_OK as i32 {
        log::warn!("ADC1 CH{} read failed (rc={})", channel, ret);
        return 0;
    }
    scale_native_sample(raw.max(0) as u16)
}

// ── GPIO Inputs ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_inputs(pins: &PinMap) -> Result<(), HwInitError> {
    // PIR drives its output push-pull; the button needs the internal pull-up.
    let inputs = [
        (pins.pir_pin, gpio_pullup_t_GPIO_PULLUP_DISABLE),
        (pins.button_pin, gpio_pullup_t_GPIO_PULLUP_ENABLE),
    ];

    for (pin, pull_up) in inputs {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: pull_up,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
    }

    info!("hw_init: GPIO inputs configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: u8) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin as i32) }) != 0
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs(pins: &PinMap) -> Result<(), HwInitError> {
    for pin in [pins.relay_pin, pins.fan_pin] {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
        unsafe { gpio_set_level(pin as i32, 0) };
    }

    info!("hw_init: GPIO outputs configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: u8, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Main-loop only.
    unsafe { gpio_set_level(pin as i32, u32::from(high)); }
}

// ── LEDC tone ────────────────────────────────────────────────

pub const LEDC_CH_TONE: u32 = 0;
/// 50 % duty at 10-bit resolution — a square wave.
pub const TONE_DUTY: u32 = 1 << (crate::pins::TONE_RESOLUTION_BITS - 1);

#[cfg(target_os = "espidf")]
unsafe fn init_ledc(pins: &PinMap) -> Result<(), HwInitError> {
    // SAFETY: Called from single main-task context via init_peripherals().
    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_10_BIT,
        freq_hz: 1_000,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    let ret = unsafe { ledc_timer_config(&timer) };
    if ret != ESP_OK { return Err(HwInitError::LedcInitFailed(ret)); }

    let ret = unsafe { ledc_channel_config(&ledc_channel_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        channel: LEDC_CH_TONE,
        timer_sel: ledc_timer_t_LEDC_TIMER_0,
        gpio_num: pins.alarm_pin as i32,
        duty: 0,
        hpoint: 0,
        ..Default::default()
    }) };
    if ret != ESP_OK { return Err(HwInitError::LedcInitFailed(ret)); }

    info!("hw_init: LEDC tone configured (GPIO{} on CH{})", pins.alarm_pin, LEDC_CH_TONE);
    Ok(())
}

/// Start a square wave at `freq_hz` on the buzzer channel.
#[cfg(target_os = "espidf")]
pub fn tone_start(freq_hz: u32) {
    // SAFETY: the LEDC timer and channel were configured in init_ledc();
    // only the main loop reprograms them.
    unsafe {
        let ret = ledc_set_freq(ledc_mode_t_LEDC_LOW_SPEED_MODE, ledc_timer_t_LEDC_TIMER_0, freq_hz);
        if ret != ESP_OK {
            log::warn!("LEDC set_freq({} Hz) failed (rc={})", freq_hz, ret);
        }
        ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, LEDC_CH_TONE, TONE_DUTY);
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, LEDC_CH_TONE);
    }
}

#[cfg(target_os = "espidf")]
pub fn tone_stop() {
    // SAFETY: see tone_start().
    unsafe {
        ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, LEDC_CH_TONE, 0);
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, LEDC_CH_TONE);
    }
}

// ── Host simulation ───────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
mod sim {
    use core::sync::atomic::{AtomicU16, AtomicU32, AtomicU64, Ordering};

    const ADC_CHANNELS: usize = 10;

    static SIM_ADC: [AtomicU16; ADC_CHANNELS] = [const { AtomicU16::new(0) }; ADC_CHANNELS];
    /// One bit per GPIO; bit set = HIGH.
    static SIM_GPIO: AtomicU64 = AtomicU64::new(0);
    /// 0 = silent.
    static SIM_TONE_HZ: AtomicU32 = AtomicU32::new(0);

    pub fn adc_read(channel: u8) -> u16 {
        SIM_ADC
            .get(channel as usize)
            .map_or(0, |a| a.load(Ordering::Relaxed))
    }

    pub fn set_adc(channel: u8, raw: u16) {
        if let Some(a) = SIM_ADC.get(channel as usize) {
            a.store(raw, Ordering::Relaxed);
        }
    }

    fn bit(pin: u8) -> u64 {
        1u64.checked_shl(u32::from(pin)).unwrap_or(0)
    }

    pub fn gpio_read(pin: u8) -> bool {
        SIM_GPIO.load(Ordering::Relaxed) & bit(pin) != 0
    }

    pub fn gpio_write(pin: u8, high: bool) {
        if high {
            SIM_GPIO.fetch_or(bit(pin), Ordering::Relaxed);
        } else {
            SIM_GPIO.fetch_and(!bit(pin), Ordering::Relaxed);
        }
    }

    pub fn tone_start(freq_hz: u32) {
        SIM_TONE_HZ.store(freq_hz, Ordering::Relaxed);
    }

    pub fn tone_stop() {
        SIM_TONE_HZ.store(0, Ordering::Relaxed);
    }
}

#[cfg(not(target_os = "espidf"))]
pub use sim::{adc_read, gpio_read, gpio_write, tone_start, tone_stop};

/// Inject an ADC count (already on the 0 – 1023 scale).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc(channel: u8, raw: u16) {
    sim::set_adc(channel, raw);
}

/// Drive a simulated input level.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_gpio(pin: u8, high: bool) {
    sim::gpio_write(pin, high);
}

/// Scale a native 12-bit sample to the 10-bit range.
pub const fn scale_native_sample(raw12: u16) -> u16 {
    raw12 >> ADC_NATIVE_TO_10BIT_SHIFT
}
