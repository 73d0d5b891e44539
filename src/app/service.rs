//! Monitoring service — the hexagonal core.
//!
//! [`MonitorService`] owns the configuration and the previous-cycle
//! condition flags.  All I/O flows through port traits injected at call
//! sites, and every blocking wait goes through an injected
//! [`DelayNs`], making the whole loop testable without hardware or
//! wall-clock time.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │     MonitorService     │
//! ActuatorPort ◀──│  rules · edge tracker  │──▶ DisplayPort
//!                 └────────────────────────┘
//! ```
//!
//! One cycle runs three phases, each followed by the phase delay and a
//! display clear:
//!
//! | Phase | Rules                         |
//! |-------|-------------------------------|
//! | 1     | light                         |
//! | 2     | fan, motion alarm             |
//! | 3     | gas alarm                     |

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::MonitorConfig;
use crate::control::{rules, Condition, ConditionFlags, ConditionState, Edge};
use crate::display::{Notification, STARTUP_BANNER};
use crate::sensors::SensorSnapshot;

use super::events::{AppEvent, CycleReport};
use super::ports::{ActuatorPort, DisplayPort, EventSink, SensorPort};

/// Level written to the relay before the first cycle.
const RELAY_BOOT_LEVEL: bool = true;

// ───────────────────────────────────────────────────────────────
// MonitorService
// ───────────────────────────────────────────────────────────────

pub struct MonitorService {
    config: MonitorConfig,
    state: ConditionState,
    cycle_count: u64,
}

impl MonitorService {
    /// Construct the service.  Does **not** touch hardware — call
    /// [`start`](Self::start) next.
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            state: ConditionState::new(),
            cycle_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Put the outputs in their boot state and show the start-up banner.
    pub fn start(
        &mut self,
        hw: &mut (impl ActuatorPort + DisplayPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) {
        let pins = self.config.pins;
        hw.write_digital(pins.relay_pin, RELAY_BOOT_LEVEL);
        hw.clear_tone(pins.alarm_pin);

        hw.clear();
        hw.set_cursor(0, 0);
        hw.print(STARTUP_BANNER);
        delay.delay_ms(self.config.startup_hold_ms);
        hw.clear();

        sink.emit(&AppEvent::Started);
        info!(
            "MonitorService started (light>{} temp>{:.1}C gas>{})",
            self.config.light_threshold, self.config.max_temp_c, self.config.gas_threshold
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full monitoring cycle: read sensors once, then the three
    /// rule phases.  Blocks for three phase delays plus the hold time of
    /// every notification shown.
    ///
    /// The `hw` parameter satisfies **all three** hardware ports.
    pub fn run_cycle(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort + DisplayPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> CycleReport {
        self.cycle_count += 1;
        let snap = SensorSnapshot::read(hw, &self.config.pins);
        debug!("cycle {}: {:?}", self.cycle_count, snap);

        let mut shown = 0u8;

        // Phase 1
        shown += self.apply_light(&snap, hw, delay, sink);
        self.end_phase(hw, delay);

        // Phase 2
        shown += self.apply_fan(&snap, hw, delay, sink);
        shown += self.apply_motion_alarm(&snap, hw, delay, sink);
        self.end_phase(hw, delay);

        // Phase 3
        shown += self.apply_gas_alarm(&snap, hw, delay, sink);
        self.end_phase(hw, delay);

        let report = CycleReport {
            cycle: self.cycle_count,
            readings: snap,
            conditions: self.state.flags(),
            notifications: shown,
        };
        sink.emit(&AppEvent::CycleCompleted(report));
        report
    }

    // ── Queries ───────────────────────────────────────────────

    /// Flag values as of the end of the last cycle.
    pub fn conditions(&self) -> ConditionFlags {
        self.state.flags()
    }

    /// Cycles completed since construction.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    // ── Rules ─────────────────────────────────────────────────

    fn apply_light(
        &mut self,
        snap: &SensorSnapshot,
        hw: &mut (impl ActuatorPort + DisplayPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> u8 {
        let on = rules::light_on(snap.light_raw, self.config.light_threshold);
        hw.write_digital(self.config.pins.relay_pin, on);
        u8::from(self.on_change(Condition::Light, on, snap, hw, delay, sink).is_some())
    }

    fn apply_fan(
        &mut self,
        snap: &SensorSnapshot,
        hw: &mut (impl ActuatorPort + DisplayPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> u8 {
        let on = rules::fan_on(snap.temperature_c, self.config.max_temp_c);
        hw.write_digital(self.config.pins.fan_pin, on);
        u8::from(self.on_change(Condition::Fan, on, snap, hw, delay, sink).is_some())
    }

    fn apply_motion_alarm(
        &mut self,
        snap: &SensorSnapshot,
        hw: &mut (impl ActuatorPort + DisplayPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> u8 {
        let active = self.state.is_active(Condition::MotionAlarm);
        let next = rules::motion_alarm_next(active, snap.motion_detected, snap.button_pressed);
        match self.on_change(Condition::MotionAlarm, next, snap, hw, delay, sink) {
            Some(edge) => {
                self.drive_alarm(hw, edge);
                1
            }
            None => 0,
        }
    }

    fn apply_gas_alarm(
        &mut self,
        snap: &SensorSnapshot,
        hw: &mut (impl ActuatorPort + DisplayPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> u8 {
        let active = rules::gas_alarm(snap.gas_raw, self.config.gas_threshold);
        match self.on_change(Condition::GasAlarm, active, snap, hw, delay, sink) {
            Some(edge) => {
                self.drive_alarm(hw, edge);
                1
            }
            None => 0,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    /// Record the new flag value; on an edge, emit the change and show
    /// the matching notification.
    fn on_change(
        &mut self,
        condition: Condition,
        active: bool,
        snap: &SensorSnapshot,
        hw: &mut impl DisplayPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> Option<Edge> {
        let edge = self.state.observe(condition, active)?;
        debug!("{} -> {}", condition, active);
        sink.emit(&AppEvent::ConditionChanged { condition, active });
        let note = Notification::for_edge(condition, edge, snap.temperature_c);
        self.notify(note, hw, delay, sink);
        Some(edge)
    }

    /// Both alarms share the buzzer: a falling edge on either silences it.
    fn drive_alarm(&self, hw: &mut impl ActuatorPort, edge: Edge) {
        let pin = self.config.pins.alarm_pin;
        match edge {
            Edge::Rising => hw.set_tone(pin, self.config.alarm_tone_hz),
            Edge::Falling => hw.clear_tone(pin),
        }
    }

    /// Two-line message, held on screen for the notification hold time.
    fn notify(
        &self,
        note: Notification,
        hw: &mut impl DisplayPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) {
        hw.clear();
        hw.set_cursor(0, 0);
        hw.print(&note.line1);
        hw.set_cursor(0, 1);
        hw.print(&note.line2);
        sink.emit(&AppEvent::Notified(note));
        delay.delay_ms(self.config.notify_hold_ms);
    }

    fn end_phase(&self, hw: &mut impl DisplayPort, delay: &mut impl DelayNs) {
        delay.delay_ms(self.config.phase_delay_ms);
        hw.clear();
    }
}
