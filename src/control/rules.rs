//! The four monitoring rules as pure functions.
//!
//! Each rule maps the current reading (and, for the latching motion alarm,
//! the current flag) to the flag's next value.  Actuation and notification
//! live in the service; nothing here touches hardware.

/// Rule 1: lights on while the LDR reads brighter than the threshold.
pub fn light_on(light_raw: u16, threshold: u16) -> bool {
    light_raw > threshold
}

/// Rule 2: fan on while the temperature exceeds the limit.
pub fn fan_on(temperature_c: f32, max_temp_c: f32) -> bool {
    temperature_c > max_temp_c
}

/// Rule 3: latching motion alarm.
///
/// Motion sets the alarm.  Only a button press during a motion-free cycle
/// clears it; motion stopping on its own leaves it latched.
pub fn motion_alarm_next(active: bool, motion_detected: bool, button_pressed: bool) -> bool {
    if motion_detected {
        true
    } else if button_pressed {
        false
    } else {
        active
    }
}

/// Rule 4: level-triggered gas alarm.
pub fn gas_alarm(gas_raw: u16, threshold: u16) -> bool {
    gas_raw > threshold
}
