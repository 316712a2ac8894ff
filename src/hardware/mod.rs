//! Board-facing abstractions for the LEDs and buttons.

pub mod gpio_button;
pub mod gpio_led;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
