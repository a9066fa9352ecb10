//! Utility functions and helpers

pub mod logging;
pub mod time;
pub mod display;

pub use logging::*;
pub use time::*;
pub use display::*;
