//! Interrupt-side half of the input path.
//!
//! A watcher runs on the interrupt-priority executor and does nothing but turn
//! a falling edge into a queued toggle. It never waits on the queue: a full
//! queue loses the edge, and the next physical press makes up for it.

use crate::blink::Lane;
use crate::hardware::traits::Button;
use crate::link::ToggleQueue;

/// Forwards every press on `button` as a toggle for `lane`. Never returns.
pub async fn watch_edges<B: Button>(mut button: B, lane: Lane, toggles: &ToggleQueue) {
    loop {
        forward_press(&mut button, lane, toggles).await;
    }
}

/// Waits for one press and posts it. Returns whether the toggle was queued.
pub async fn forward_press<B: Button>(
    button: &mut B,
    lane: Lane,
    toggles: &ToggleQueue,
) -> bool {
    button.wait_for_press().await;
    toggles.post(lane)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TOGGLE_QUEUE_DEPTH;
    use crate::hardware::gpio_button::GpioButton;
    use crate::hardware::testing::FakeEdges;
    use embassy_futures::{block_on, poll_once};

    #[test]
    fn test_press_is_posted() {
        let toggles = ToggleQueue::new();
        let mut button = GpioButton::new(FakeEdges::new(1));

        assert!(block_on(forward_press(&mut button, Lane::Yellow, &toggles)));
        assert_eq!(toggles.try_next(), Some(Lane::Yellow));
        assert_eq!(toggles.try_next(), None);
    }

    #[test]
    fn test_no_edge_no_toggle() {
        let toggles = ToggleQueue::new();
        let mut button = GpioButton::new(FakeEdges::new(0));

        assert!(poll_once(forward_press(&mut button, Lane::Red, &toggles)).is_pending());
        assert_eq!(toggles.try_next(), None);
    }

    #[test]
    fn test_watcher_drops_when_full() {
        let toggles = ToggleQueue::new();
        let edges = TOGGLE_QUEUE_DEPTH + 3;

        // Runs until the fake input has no more edges.
        let watcher = watch_edges(GpioButton::new(FakeEdges::new(edges)), Lane::Red, &toggles);
        assert!(poll_once(watcher).is_pending());

        assert_eq!(toggles.take_dropped(), 3);
        let mut queued = 0;
        while toggles.try_next().is_some() {
            queued += 1;
        }
        assert_eq!(queued, TOGGLE_QUEUE_DEPTH);
    }
}
