//! Input dispatch: turns toggle signals into blink periods.

use defmt_or_log::{info, warn};

use crate::blink::{BlinkPeriod, Lane, Toggles};
use crate::link::Links;

/// Owns the toggle state of both lanes and feeds each driver its period.
pub struct Dispatcher<'a> {
    links: &'a Links,
    toggles: Toggles,
}

impl<'a> Dispatcher<'a> {
    pub fn new(links: &'a Links, active_period: BlinkPeriod) -> Self {
        Self {
            links,
            toggles: Toggles::new(active_period),
        }
    }

    /// Services toggles forever.
    pub async fn run(mut self) {
        info!("dispatch: started");
        loop {
            self.service_next().await;
        }
    }

    /// Waits for the next toggle and applies it.
    pub async fn service_next(&mut self) -> (Lane, BlinkPeriod) {
        let lane = self.links.toggles.next().await;
        (lane, self.apply(lane))
    }

    /// Flips `lane` and hands the new period to its driver.
    ///
    /// The handoff is a single slot, so this never waits on a slow driver and
    /// the other lane is serviced right away.
    pub fn apply(&mut self, lane: Lane) -> BlinkPeriod {
        let dropped = self.links.toggles.take_dropped();
        if dropped > 0 {
            warn!("dispatch: {} toggle signal(s) dropped", dropped);
        }

        let period = self.toggles.press(lane);
        self.links.period(lane).signal(period);
        info!("dispatch: {} -> {}", lane, period);
        period
    }

    #[cfg(test)]
    pub fn toggles(&self) -> &Toggles {
        &self.toggles
    }
}
