//! Monitoring decision logic — pure rules plus the edge tracker.

pub mod rules;
pub mod state;

pub use state::{Condition, ConditionFlags, ConditionState, Edge};
