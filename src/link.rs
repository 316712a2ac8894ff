//! Handoff primitives between the interrupt side and the tasks.
//!
//! ```text
//! edge watcher (IRQ) --ToggleQueue--> dispatcher --PeriodSignal--> driver R
//!                                                \--PeriodSignal--> driver Y
//! ```
//!
//! Everything is built once by the firmware entry and handed out as
//! `&'static` references.

use core::sync::atomic::{AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use crate::blink::{BlinkPeriod, Lane};
use crate::config::TOGGLE_QUEUE_DEPTH;

/// Single-slot period handoff. A new value replaces one not yet taken.
pub type PeriodSignal = Signal<CriticalSectionRawMutex, BlinkPeriod>;

/// Bounded FIFO of toggle signals, filled from interrupt priority.
pub struct ToggleQueue {
    queue: Channel<CriticalSectionRawMutex, Lane, TOGGLE_QUEUE_DEPTH>,
    dropped: AtomicU32,
}

impl ToggleQueue {
    pub const fn new() -> Self {
        Self {
            queue: Channel::new(),
            dropped: AtomicU32::new(0),
        }
    }

    /// Posts a toggle without waiting. Returns `false` if the queue was full
    /// and the signal was dropped.
    pub fn post(&self, lane: Lane) -> bool {
        match self.queue.try_send(lane) {
            Ok(()) => true,
            Err(_) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                false
            }
        }
    }

    /// Waits for the oldest pending toggle.
    pub async fn next(&self) -> Lane {
        self.queue.receive().await
    }

    #[cfg(test)]
    pub fn try_next(&self) -> Option<Lane> {
        self.queue.try_receive().ok()
    }

    /// Number of signals dropped since the last call.
    pub fn take_dropped(&self) -> u32 {
        self.dropped.swap(0, Ordering::Relaxed)
    }
}

/// The full set of primitives for both lanes.
pub struct Links {
    pub toggles: ToggleQueue,
    red: PeriodSignal,
    yellow: PeriodSignal,
}

impl Links {
    pub const fn new() -> Self {
        Self {
            toggles: ToggleQueue::new(),
            red: Signal::new(),
            yellow: Signal::new(),
        }
    }

    pub fn period(&self, lane: Lane) -> &PeriodSignal {
        match lane {
            Lane::Red => &self.red,
            Lane::Yellow => &self.yellow,
        }
    }
}
