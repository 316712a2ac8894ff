//! Two button-toggled blinking LEDs on an embassy executor.
//!
//! The library holds everything that does not touch a concrete peripheral:
//! the per-button toggle state machine, the handoff primitives between the
//! interrupt side and the tasks, and the task loops themselves. The firmware
//! binary in `src/bin/twin_blink.rs` binds them to the Blue Pill pins.

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate critical_section;

pub mod blink;
pub mod config;
pub mod error;
pub mod hardware;
pub mod link;
pub mod tasks;
