//! Outbound application events.
//!
//! The [`MonitorService`](super::service::MonitorService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them; on target that is the
//! serial log.

use crate::control::{Condition, ConditionFlags};
use crate::display::Notification;
use crate::sensors::SensorSnapshot;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The start-up sequence finished; the loop is about to run.
    Started,

    /// A condition flag flipped.
    ConditionChanged { condition: Condition, active: bool },

    /// A notification was shown on the display.
    Notified(Notification),

    /// One full monitoring cycle completed.
    CycleCompleted(CycleReport),
}

/// Summary of one monitoring cycle, suitable for logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    /// 1-based cycle number.
    pub cycle: u64,
    /// Readings taken at the top of the cycle.
    pub readings: SensorSnapshot,
    /// Flag values at the end of the cycle.
    pub conditions: ConditionFlags,
    /// Notifications shown during the cycle.
    pub notifications: u8,
}
