//! Previous-cycle condition flags and edge detection.
//!
//! [`ConditionState`] is the only state that survives from one cycle to
//! the next.  Every flag starts `false`; after [`ConditionState::observe`]
//! the stored value always equals the value just observed.

use core::fmt;

/// One of the four monitored conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Light,
    Fan,
    MotionAlarm,
    GasAlarm,
}

impl Condition {
    pub const ALL: [Self; 4] = [Self::Light, Self::Fan, Self::MotionAlarm, Self::GasAlarm];

    const fn index(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Fan => 1,
            Self::MotionAlarm => 2,
            Self::GasAlarm => 3,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Fan => write!(f, "fan"),
            Self::MotionAlarm => write!(f, "motion-alarm"),
            Self::GasAlarm => write!(f, "gas-alarm"),
        }
    }
}

/// Direction of a flag change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// `false` → `true`
    Rising,
    /// `true` → `false`
    Falling,
}

impl Edge {
    /// The flag value after this edge.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Rising)
    }
}

/// Snapshot of all four flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionFlags {
    pub light_on: bool,
    pub fan_on: bool,
    pub motion_alarm: bool,
    pub gas_alarm: bool,
}

impl ConditionFlags {
    pub fn get(&self, condition: Condition) -> bool {
        match condition {
            Condition::Light => self.light_on,
            Condition::Fan => self.fan_on,
            Condition::MotionAlarm => self.motion_alarm,
            Condition::GasAlarm => self.gas_alarm,
        }
    }
}

/// Flag values as of the last observation.
#[derive(Debug, Clone, Default)]
pub struct ConditionState {
    previous: [bool; 4],
}

impl ConditionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `active` for `condition`.  Returns the edge if the value
    /// differs from the previous observation, `None` on a held state.
    pub fn observe(&mut self, condition: Condition, active: bool) -> Option<Edge> {
        let slot = &mut self.previous[condition.index()];
        if *slot == active {
            return None;
        }
        *slot = active;
        Some(if active { Edge::Rising } else { Edge::Falling })
    }

    /// Last observed value of `condition`.
    pub fn is_active(&self, condition: Condition) -> bool {
        self.previous[condition.index()]
    }

    pub fn flags(&self) -> ConditionFlags {
        ConditionFlags {
            light_on: self.is_active(Condition::Light),
            fan_on: self.is_active(Condition::Fan),
            motion_alarm: self.is_active(Condition::MotionAlarm),
            gas_alarm: self.is_active(Condition::GasAlarm),
        }
    }
}
