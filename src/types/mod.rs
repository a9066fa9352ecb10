//! Core data types and structures

pub mod trade;
pub mod account;
pub mod index;

pub use trade::*;
pub use account::*;
pub use index::*;
