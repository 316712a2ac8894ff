use core::convert::Infallible;

use super::traits::Led;
use embedded_hal::digital::OutputPin;

/// Active-high LED on a push-pull pin.
pub struct GpioLed<P> {
    pin: P,
}

impl<P> GpioLed<P>
where
    P: OutputPin<Error = Infallible>,
{
    /// Takes the pin and drives it low.
    pub fn new(mut pin: P) -> Self {
        let Ok(()) = pin.set_low();
        Self { pin }
    }
}

impl<P> Led for GpioLed<P>
where
    P: OutputPin<Error = Infallible>,
{
    fn on(&mut self) {
        let Ok(()) = self.pin.set_high();
    }

    fn off(&mut self) {
        let Ok(()) = self.pin.set_low();
    }
}
