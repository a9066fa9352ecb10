//! Myfxbook → Notion trade sync
//!
//! Polls a Myfxbook account for open and historical trades and mirrors them
//! into a Notion database, patching pages that already exist for a trade's
//! open time and creating the rest.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod myfxbook;
pub mod notion;
pub mod sync;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{SyncError, SyncResult};
pub use types::*;
