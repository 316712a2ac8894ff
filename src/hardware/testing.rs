//! Host fakes for pins and delays. They all append to one shared log so tests
//! can assert the exact waveform.

use core::convert::Infallible;
use core::task::Poll;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    High,
    Low,
    Wait(u32),
}

#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub struct FakePin {
    log: EventLog,
}

impl FakePin {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.push(Event::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.push(Event::High);
        Ok(())
    }
}

pub struct FakeDelay {
    log: EventLog,
}

impl FakeDelay {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::Wait(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::Wait(ms));
    }
}

/// Delay whose waits hang until the flag from [`GateDelay::gate`] is set.
///
/// Each wait is logged when it starts.
pub struct GateDelay {
    log: EventLog,
    open: Rc<Cell<bool>>,
}

impl GateDelay {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            open: Rc::default(),
        }
    }

    /// Handle that releases every pending and future wait.
    pub fn gate(&self) -> Rc<Cell<bool>> {
        self.open.clone()
    }
}

impl DelayNs for GateDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000).await
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::Wait(ms));
        let open = self.open.clone();
        core::future::poll_fn(move |_| {
            if open.get() {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        })
        .await
    }
}

/// Input that reports a fixed number of falling edges, then never again.
pub struct FakeEdges {
    remaining: usize,
}

impl FakeEdges {
    pub fn new(edges: usize) -> Self {
        Self { remaining: edges }
    }
}

impl ErrorType for FakeEdges {
    type Error = Infallible;
}

impl Wait for FakeEdges {
    async fn wait_for_high(&mut self) -> Result<(), Infallible> {
        core::future::pending().await
    }

    async fn wait_for_low(&mut self) -> Result<(), Infallible> {
        core::future::pending().await
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Infallible> {
        core::future::pending().await
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Infallible> {
        if self.remaining == 0 {
            core::future::pending::<()>().await;
        }
        self.remaining -= 1;
        Ok(())
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Infallible> {
        self.wait_for_falling_edge().await
    }
}
