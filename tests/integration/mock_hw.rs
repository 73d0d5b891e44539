//! Mock hardware adapter for integration tests.
//!
//! Records every actuator and display call in order so tests can assert
//! on the full command history, and exposes settable sensor levels.
//! Delays are recorded, never slept.

use embedded_hal::delay::DelayNs;
use homewatch::app::events::AppEvent;
use homewatch::app::ports::{ActuatorPort, DisplayPort, EventSink, SensorPort};
use homewatch::config::MonitorConfig;
use homewatch::display::Notification;
use std::collections::HashMap;

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum HwCall {
    WriteDigital { pin: u8, high: bool },
    SetTone { pin: u8, freq_hz: u32 },
    ClearTone { pin: u8 },
    Clear,
    SetCursor { col: u8, row: u8 },
    Print(String),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<HwCall>,
    analog: HashMap<u8, u16>,
    digital: HashMap<u8, bool>,
    config: MonitorConfig,
}

#[allow(dead_code)]
impl MockHardware {
    /// All analog inputs at 0, PIR low, button released (pulled HIGH).
    pub fn new(config: &MonitorConfig) -> Self {
        let mut hw = Self {
            calls: Vec::new(),
            analog: HashMap::new(),
            digital: HashMap::new(),
            config: config.clone(),
        };
        hw.press_button(false);
        hw
    }

    pub fn set_light(&mut self, raw: u16) {
        self.analog.insert(self.config.pins.ldr_channel, raw);
    }

    pub fn set_temp_raw(&mut self, raw: u16) {
        self.analog.insert(self.config.pins.temp_channel, raw);
    }

    pub fn set_gas(&mut self, raw: u16) {
        self.analog.insert(self.config.pins.gas_channel, raw);
    }

    pub fn set_motion(&mut self, detected: bool) {
        self.digital.insert(self.config.pins.pir_pin, detected);
    }

    /// Active-low: pressing pulls the line LOW.
    pub fn press_button(&mut self, pressed: bool) {
        self.digital.insert(self.config.pins.button_pin, !pressed);
    }

    pub fn take_calls(&mut self) -> Vec<HwCall> {
        std::mem::take(&mut self.calls)
    }

    /// Pairs of lines printed as (row 0, row 1) notifications, in order.
    /// The start-up banner is a single-line print and is not included.
    pub fn notifications(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        let mut row = 0u8;
        let mut line1: Option<String> = None;
        for call in &self.calls {
            match call {
                HwCall::SetCursor { row: r, .. } => row = *r,
                HwCall::Print(text) if row == 0 => line1 = Some(text.clone()),
                HwCall::Print(text) => {
                    if let Some(l1) = line1.take() {
                        out.push((l1, text.clone()));
                    }
                }
                _ => {}
            }
        }
        out
    }

    /// Last level written to `pin`, if any.
    pub fn last_level(&self, pin: u8) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            HwCall::WriteDigital { pin: p, high } if *p == pin => Some(*high),
            _ => None,
        })
    }

    /// Whether the buzzer is sounding after the recorded calls.
    pub fn tone_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                HwCall::SetTone { .. } => Some(true),
                HwCall::ClearTone { .. } => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn tone_calls(&self) -> Vec<HwCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, HwCall::SetTone { .. } | HwCall::ClearTone { .. }))
            .cloned()
            .collect()
    }
}

impl SensorPort for MockHardware {
    fn read_analog(&mut self, channel: u8) -> u16 {
        self.analog.get(&channel).copied().unwrap_or(0)
    }

    fn read_digital(&mut self, pin: u8) -> bool {
        self.digital.get(&pin).copied().unwrap_or(false)
    }
}

impl ActuatorPort for MockHardware {
    fn write_digital(&mut self, pin: u8, high: bool) {
        self.calls.push(HwCall::WriteDigital { pin, high });
    }

    fn set_tone(&mut self, pin: u8, freq_hz: u32) {
        self.calls.push(HwCall::SetTone { pin, freq_hz });
    }

    fn clear_tone(&mut self, pin: u8) {
        self.calls.push(HwCall::ClearTone { pin });
    }
}

impl DisplayPort for MockHardware {
    fn clear(&mut self) {
        self.calls.push(HwCall::Clear);
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.calls.push(HwCall::SetCursor { col, row });
    }

    fn print(&mut self, text: &str) {
        self.calls.push(HwCall::Print(text.to_string()));
    }
}

// ── MockDelay ─────────────────────────────────────────────────

/// Records requested waits in milliseconds.
#[derive(Default)]
pub struct MockDelay {
    pub waits_ms: Vec<u32>,
}

#[allow(dead_code)]
impl MockDelay {
    pub fn total_ms(&self) -> u64 {
        self.waits_ms.iter().map(|&ms| u64::from(ms)).sum()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn notes(&self) -> Vec<Notification> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Notified(n) => Some(n.clone()),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
