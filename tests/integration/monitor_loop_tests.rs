//! Start-up sequence, cycle structure, light and fan rules.

use crate::mock_hw::{HwCall, MockDelay, MockHardware, RecordingSink};

use homewatch::app::events::AppEvent;
use homewatch::app::service::MonitorService;
use homewatch::config::MonitorConfig;
use homewatch::control::Condition;

fn n(l1: &str, l2: &str) -> (String, String) {
    (l1.to_string(), l2.to_string())
}

fn make_app() -> (MonitorService, MockHardware, MockDelay, RecordingSink) {
    let config = MonitorConfig::default();
    let hw = MockHardware::new(&config);
    (MonitorService::new(config), hw, MockDelay::default(), RecordingSink::default())
}

// ── Start-up ──────────────────────────────────────────────────

#[test]
fn start_drives_boot_outputs_and_shows_banner() {
    let (mut app, mut hw, mut delay, mut sink) = make_app();
    let pins = app.config().pins;

    app.start(&mut hw, &mut delay, &mut sink);

    assert_eq!(
        hw.calls,
        vec![
            HwCall::WriteDigital { pin: pins.relay_pin, high: true },
            HwCall::ClearTone { pin: pins.alarm_pin },
            HwCall::Clear,
            HwCall::SetCursor { col: 0, row: 0 },
            HwCall::Print("Initializing...".to_string()),
            HwCall::Clear,
        ]
    );
    assert_eq!(delay.waits_ms, vec![1000]);
    assert_eq!(sink.events, vec![AppEvent::Started]);
    assert_eq!(app.cycle_count(), 0);
}

// ── Cycle structure ───────────────────────────────────────────

#[test]
fn quiet_cycle_runs_three_phases_without_notifications() {
    let (mut app, mut hw, mut delay, mut sink) = make_app();
    let pins = app.config().pins;

    let report = app.run_cycle(&mut hw, &mut delay, &mut sink);

    assert_eq!(
        hw.calls,
        vec![
            HwCall::WriteDigital { pin: pins.relay_pin, high: false },
            HwCall::Clear,
            HwCall::WriteDigital { pin: pins.fan_pin, high: false },
            HwCall::Clear,
            HwCall::Clear,
        ]
    );
    assert_eq!(delay.waits_ms, vec![1000, 1000, 1000]);
    assert_eq!(report.cycle, 1);
    assert_eq!(report.notifications, 0);
    assert!(matches!(sink.events.last(), Some(AppEvent::CycleCompleted(r)) if r.cycle == 1));
}

#[test]
fn every_rule_firing_notifies_in_phase_order() {
    let (mut app, mut hw, mut delay, mut sink) = make_app();
    hw.set_light(600);
    hw.set_temp_raw(174);
    hw.set_motion(true);
    hw.set_gas(700);

    let report = app.run_cycle(&mut hw, &mut delay, &mut sink);

    assert_eq!(
        hw.notifications(),
        vec![
            n("Lights", "on!"),
            n("Fan on!", "35.0 \u{00b0}C"),
            n("Alarm", "on!"),
            n("Alert", "gas detected."),
        ]
    );
    assert_eq!(report.notifications, 4);
    // Light hold, phase 1, fan hold, alarm hold, phase 2, gas hold, phase 3
    assert_eq!(delay.waits_ms, vec![2000, 1000, 2000, 2000, 1000, 2000, 1000]);
    assert_eq!(delay.total_ms(), 11_000);

    let flags = app.conditions();
    assert!(flags.light_on && flags.fan_on && flags.motion_alarm && flags.gas_alarm);
}

#[test]
fn condition_change_is_emitted_before_its_notification() {
    let (mut app, mut hw, mut delay, mut sink) = make_app();
    hw.set_light(900);

    app.run_cycle(&mut hw, &mut delay, &mut sink);

    assert!(matches!(
        sink.events.as_slice(),
        [
            AppEvent::ConditionChanged { condition: Condition::Light, active: true },
            AppEvent::Notified(note),
            AppEvent::CycleCompleted(_),
        ] if note.line1.as_str() == "Lights"
    ));
}

#[test]
fn sensors_are_sampled_once_per_cycle() {
    let (mut app, mut hw, mut delay, mut sink) = make_app();
    hw.set_temp_raw(174);

    let report = app.run_cycle(&mut hw, &mut delay, &mut sink);

    assert_eq!(report.readings.temp_raw, 174);
    assert!((report.readings.temperature_c - 35.04).abs() < 0.01);
    assert!(!report.readings.button_pressed);
    assert!(!report.readings.motion_detected);
}

// ── Light rule ────────────────────────────────────────────────

#[test]
fn light_notifies_on_edges_only() {
    let (mut app, mut hw, mut delay, mut sink) = make_app();
    let relay = app.config().pins.relay_pin;

    hw.set_light(600);
    app.run_cycle(&mut hw, &mut delay, &mut sink);
    assert_eq!(hw.last_level(relay), Some(true));
    assert_eq!(hw.notifications(), vec![n("Lights", "on!")]);
    hw.take_calls();

    app.run_cycle(&mut hw, &mut delay, &mut sink);
    assert_eq!(hw.last_level(relay), Some(true), "relay is rewritten every cycle");
    assert!(hw.notifications().is_empty());
    hw.take_calls();

    hw.set_light(400);
    app.run_cycle(&mut hw, &mut delay, &mut sink);
    assert_eq!(hw.last_level(relay), Some(false));
    assert_eq!(hw.notifications(), vec![n("Lights", "off!")]);
}

#[test]
fn light_at_threshold_stays_off() {
    let (mut app, mut hw, mut delay, mut sink) = make_app();
    hw.set_light(500);

    app.run_cycle(&mut hw, &mut delay, &mut sink);

    assert!(!app.conditions().light_on);
    assert!(hw.notifications().is_empty());
}

#[test]
fn relay_is_driven_low_after_high_boot_level() {
    let (mut app, mut hw, mut delay, mut sink) = make_app();
    let relay = app.config().pins.relay_pin;

    app.start(&mut hw, &mut delay, &mut sink);
    assert_eq!(hw.last_level(relay), Some(true));

    // Dark room on the first cycle: no "off" message, but the relay drops.
    app.run_cycle(&mut hw, &mut delay, &mut sink);
    assert_eq!(hw.last_level(relay), Some(false));
    assert!(hw.notifications().is_empty());
}

// ── Fan rule ──────────────────────────────────────────────────

#[test]
fn fan_messages_carry_the_temperature() {
    let (mut app, mut hw, mut delay, mut sink) = make_app();
    let fan = app.config().pins.fan_pin;

    hw.set_temp_raw(174);
    app.run_cycle(&mut hw, &mut delay, &mut sink);
    assert_eq!(hw.last_level(fan), Some(true));
    assert_eq!(hw.notifications(), vec![n("Fan on!", "35.0 \u{00b0}C")]);
    hw.take_calls();

    hw.set_temp_raw(164);
    app.run_cycle(&mut hw, &mut delay, &mut sink);
    assert_eq!(hw.last_level(fan), Some(false));
    assert_eq!(hw.notifications(), vec![n("Fan off!", "30.2 \u{00b0}C")]);
}

// ── Configuration ─────────────────────────────────────────────

#[test]
fn json_overrides_thresholds_and_timings() {
    let config = MonitorConfig::from_json(
        r#"{ "light_threshold": 100, "phase_delay_ms": 10, "notify_hold_ms": 50 }"#,
    )
    .unwrap();
    let mut hw = MockHardware::new(&config);
    let mut delay = MockDelay::default();
    let mut sink = RecordingSink::default();
    let mut app = MonitorService::new(config);

    hw.set_light(150);
    app.run_cycle(&mut hw, &mut delay, &mut sink);

    assert!(app.conditions().light_on);
    assert_eq!(delay.waits_ms, vec![50, 10, 10, 10]);
}
