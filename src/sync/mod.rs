//! Trade reconciliation and the polling cycle

pub mod upsert;
pub mod history;
pub mod report;
pub mod job;

pub use upsert::*;
pub use history::*;
pub use report::*;
pub use job::*;
