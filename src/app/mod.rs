//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the monitoring loop for the Homewatch controller:
//! sensor sampling, the four rules, edge-triggered notifications.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
