//! I/O adapters between the application and the outside world.

pub mod console;
