//! Error handling for the sync

pub mod sync_error;

pub use sync_error::*;
