//! Adapters connecting the driver's console port to the outside world.

pub mod console;
