//! Compile-time configuration.

/// Half-period of an active blink, in milliseconds.
///
/// The LED stays high for this long, then low for this long.
pub const BLINK_HALF_PERIOD_MS: u32 = 100;

/// Number of toggle signals the interrupt side can queue before it starts
/// dropping them.
pub const TOGGLE_QUEUE_DEPTH: usize = 32;
