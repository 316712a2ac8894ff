use core::convert::Infallible;

use super::traits::Button;
use embedded_hal_async::digital::Wait;

/// Push-button wired to ground with a pull-up: pressed reads low.
pub struct GpioButton<P> {
    pin: P,
}

impl<P> GpioButton<P>
where
    P: Wait<Error = Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P> Button for GpioButton<P>
where
    P: Wait<Error = Infallible>,
{
    async fn wait_for_press(&mut self) {
        let Ok(()) = self.pin.wait_for_falling_edge().await;
    }
}
