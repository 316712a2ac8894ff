//! Task bodies. They are generic over the pin and delay traits so the
//! firmware binary only has to wrap them in `#[embassy_executor::task]`s.

pub mod dispatch;
pub mod driver;
pub mod edge;
