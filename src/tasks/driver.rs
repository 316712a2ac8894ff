//! Output driver: runs one LED from the latest blink period.

use defmt_or_log::debug;
use embedded_hal_async::delay::DelayNs;

use crate::blink::{BlinkPeriod, Lane};
use crate::hardware::traits::Led;
use crate::link::PeriodSignal;

/// Drives one LED. It is the only writer of that LED.
///
/// A new period is picked up only between full cycles, so a change can take
/// up to one full period to show.
pub struct BlinkDriver<'a, L, D> {
    lane: Lane,
    led: L,
    delay: D,
    periods: &'a PeriodSignal,
    current: BlinkPeriod,
}

impl<'a, L, D> BlinkDriver<'a, L, D>
where
    L: Led,
    D: DelayNs,
{
    pub fn new(lane: Lane, mut led: L, delay: D, periods: &'a PeriodSignal) -> Self {
        led.off();
        Self {
            lane,
            led,
            delay,
            periods,
            current: BlinkPeriod::IDLE,
        }
    }

    /// Blinks forever.
    pub async fn run(mut self) {
        debug!("driver {}: started", self.lane);
        loop {
            self.cycle().await;
        }
    }

    /// One pass of the drive loop.
    ///
    /// Blinking: one high half-cycle then one low half-cycle. Idle: the LED
    /// is held low and the pass ends once a new period arrives.
    pub async fn cycle(&mut self) {
        if let Some(period) = self.periods.try_take() {
            self.adopt(period);
        }

        if self.current.is_idle() {
            self.led.off();
            let period = self.periods.wait().await;
            self.adopt(period);
            return;
        }

        let half = self.current.as_millis();
        self.led.on();
        self.delay.delay_ms(half).await;
        self.led.off();
        self.delay.delay_ms(half).await;
    }

    #[cfg(test)]
    pub fn period(&self) -> BlinkPeriod {
        self.current
    }

    fn adopt(&mut self, period: BlinkPeriod) {
        if period != self.current {
            debug!("driver {}: {} -> {}", self.lane, self.current, period);
        }
        self.current = period;
    }
}
