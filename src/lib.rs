//! Homewatch controller library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod display;
pub mod error;
pub mod pins;
pub mod sensors;

// The driver layer carries host simulation stubs so the crate builds and
// tests off-target; the real implementations are cfg-gated inside.
pub mod adapters;
pub mod drivers;
