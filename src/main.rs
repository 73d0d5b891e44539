//! Homewatch Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single blocking monitoring loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter            LogEventSink        FreeRtos       │
//! │  (Sensor+Actuator+Display)  (EventSink)         (DelayNs)      │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            MonitorService (pure logic)                 │    │
//! │  │  rules · edge tracker · notifications                  │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::{info, warn};

use homewatch::adapters::hardware::HardwareAdapter;
use homewatch::adapters::log_sink::LogEventSink;
use homewatch::app::service::MonitorService;
use homewatch::config::MonitorConfig;
use homewatch::drivers::buzzer::Buzzer;
use homewatch::drivers::lcd::Lcd1602;
use homewatch::drivers::watchdog::{self, Watchdog};
use homewatch::drivers::hw_init;
use homewatch::error::Error;
use homewatch::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Homewatch v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration (defaults or build-time override) ────
    let config = match option_env!("HOMEWATCH_CONFIG") {
        Some(doc) => MonitorConfig::from_json(doc).unwrap_or_else(|e| {
            warn!("HOMEWATCH_CONFIG rejected ({}), using defaults", e);
            MonitorConfig::default()
        }),
        None => MonitorConfig::default(),
    };

    // ── 3. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals(&config.pins) {
        // Nothing can be sensed or driven. Park here; the watchdog is
        // not armed yet.
        log::error!("{} ({}), halting", Error::from(e), e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let peripherals = Peripherals::take()?;
    // SDA = GPIO14, SCL = GPIO15
    let i2c_cfg = I2cConfig::new().baudrate(Hertz(pins::I2C_BAUD_HZ));
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio14,
        peripherals.pins.gpio15,
        &i2c_cfg,
    )?;

    let mut lcd = Lcd1602::new(i2c, FreeRtos, pins::LCD_I2C_ADDR);
    if let Err(e) = lcd.init().map_err(|_| Error::Display) {
        warn!("{} at 0x{:02x} — continuing without display", e, pins::LCD_I2C_ADDR);
    }

    let mut hw = HardwareAdapter::new(Buzzer::new(config.pins.alarm_pin), lcd);
    let mut delay = FreeRtos;
    let mut log_sink = LogEventSink::new();
    let watchdog = Watchdog::new(watchdog::timeout_for(&config));

    // ── 4. Monitoring loop ────────────────────────────────────
    let mut app = MonitorService::new(config);
    app.start(&mut hw, &mut delay, &mut log_sink);
    watchdog.feed();

    info!("System ready. Entering monitoring loop.");

    loop {
        app.run_cycle(&mut hw, &mut delay, &mut log_sink);
        watchdog.feed();
    }
}
