//! STM32F103 Blue Pill Twin Button-Toggled Blinkers
//! =============================================================================================
//!
//! Two LEDs, each switched between "blinking" and "off" by its own push-button.
//!
//! Hardware Connections:
//!   Button R -> PB1  (to GND when pressed, internal pull-up, EXTI1)
//!   Button Y -> PB15 (to GND when pressed, internal pull-up, EXTI15)
//!   LED R    -> PA5  (active high, through a resistor to GND)
//!   LED Y    -> PA10 (active high, through a resistor to GND)
//!
//! Execution:
//! 1. Edge watchers run on an interrupt executor (USART1 vector, priority P6)
//!    and only queue toggles, dropping them when the queue is full
//! 2. The dispatch task and both LED drivers run on the thread-mode executor
//! 3. Nothing ever shuts down
//!
//! Expected Behavior:
//!   - Both LEDs are off after reset
//!   - A press starts its LED blinking at 100ms on / 100ms off
//!   - The next press on the same button turns it off again

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::info;
use defmt_rtt as _; // Global logger
use embassy_executor::{Executor, InterruptExecutor, SendSpawner, Spawner};
use embassy_stm32::{
    exti::ExtiInput,
    gpio::{Level, Output, Pull, Speed},
    interrupt,
    interrupt::{InterruptExt, Priority},
};
use embassy_time::Delay;
use panic_probe as _; // Panic handler
use static_cell::StaticCell;

use twin_blink::{
    blink::{BlinkPeriod, Lane},
    config::BLINK_HALF_PERIOD_MS,
    error::StartupError,
    hardware::{gpio_button::GpioButton, gpio_led::GpioLed},
    link::{Links, ToggleQueue},
    tasks::{dispatch::Dispatcher, driver::BlinkDriver, edge::watch_edges},
};

type BoardButton = GpioButton<ExtiInput<'static>>;
type BoardLed = GpioLed<Output<'static>>;

/// Priority of the edge watchers. Any thread-mode task is preempted by them.
const EDGE_PRIORITY: Priority = Priority::P6;

static EDGE_EXECUTOR: InterruptExecutor = InterruptExecutor::new();
static TASK_EXECUTOR: StaticCell<Executor> = StaticCell::new();
static LINKS: StaticCell<Links> = StaticCell::new();

#[interrupt]
unsafe fn USART1() {
    unsafe { EDGE_EXECUTOR.on_interrupt() }
}

#[entry]
fn main() -> ! {
    let p = embassy_stm32::init(Default::default());
    info!("twin-blink: starting");

    let links: &'static Links = match LINKS.try_init(Links::new()) {
        Some(links) => links,
        None => defmt::panic!("{}", StartupError::ResourceTaken("links")),
    };

    // EXTI bindings are made here, once, and live as long as the firmware.
    let red_button = GpioButton::new(ExtiInput::new(p.PB1, p.EXTI1, Pull::Up));
    let yellow_button = GpioButton::new(ExtiInput::new(p.PB15, p.EXTI15, Pull::Up));

    let red_led = GpioLed::new(Output::new(p.PA5, Level::Low, Speed::Low));
    let yellow_led = GpioLed::new(Output::new(p.PA10, Level::Low, Speed::Low));

    interrupt::USART1.set_priority(EDGE_PRIORITY);
    let edge_spawner = EDGE_EXECUTOR.start(interrupt::USART1);
    if let Err(e) = spawn_edge_watchers(edge_spawner, links, red_button, yellow_button) {
        defmt::panic!("{}", e);
    }

    let executor = match TASK_EXECUTOR.try_init(Executor::new()) {
        Some(executor) => executor,
        None => defmt::panic!("{}", StartupError::ResourceTaken("task executor")),
    };
    executor.run(move |spawner| {
        if let Err(e) = spawn_tasks(spawner, links, red_led, yellow_led) {
            defmt::panic!("{}", e);
        }
    })
}

fn spawn_edge_watchers(
    spawner: SendSpawner,
    links: &'static Links,
    red: BoardButton,
    yellow: BoardButton,
) -> Result<(), StartupError> {
    spawner
        .spawn(edge_task(red, Lane::Red, &links.toggles))
        .map_err(|_| StartupError::Spawn("edge R"))?;
    spawner
        .spawn(edge_task(yellow, Lane::Yellow, &links.toggles))
        .map_err(|_| StartupError::Spawn("edge Y"))?;
    Ok(())
}

fn spawn_tasks(
    spawner: Spawner,
    links: &'static Links,
    red: BoardLed,
    yellow: BoardLed,
) -> Result<(), StartupError> {
    let period = BlinkPeriod::from_millis(BLINK_HALF_PERIOD_MS);

    spawner
        .spawn(dispatch_task(Dispatcher::new(links, period)))
        .map_err(|_| StartupError::Spawn("dispatch"))?;
    spawner
        .spawn(blink_task(BlinkDriver::new(
            Lane::Red,
            red,
            Delay,
            links.period(Lane::Red),
        )))
        .map_err(|_| StartupError::Spawn("blink R"))?;
    spawner
        .spawn(blink_task(BlinkDriver::new(
            Lane::Yellow,
            yellow,
            Delay,
            links.period(Lane::Yellow),
        )))
        .map_err(|_| StartupError::Spawn("blink Y"))?;

    info!("twin-blink: tasks running");
    Ok(())
}

/// Edge Watcher (interrupt priority)
///
/// Waits for a falling edge and queues a toggle. Never blocks on the queue.
#[embassy_executor::task(pool_size = 2)]
async fn edge_task(button: BoardButton, lane: Lane, toggles: &'static ToggleQueue) {
    watch_edges(button, lane, toggles).await
}

/// Input Dispatch Task
#[embassy_executor::task]
async fn dispatch_task(dispatcher: Dispatcher<'static>) {
    dispatcher.run().await
}

/// LED Driver Task, one per LED
#[embassy_executor::task(pool_size = 2)]
async fn blink_task(driver: BlinkDriver<'static, BoardLed, Delay>) {
    driver.run().await
}
