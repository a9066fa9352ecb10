//! In-memory index of trades already present in the Notion database

use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct ExistingTrade {
    /// Content of the "Trade Type" field (`open` or `history`).
    pub status: String,
    pub page_id: String,
}

/// Open time → existing page, keyed on the whole-second open time.
#[derive(Debug, Clone, Default)]
pub struct ExistingTradeIndex {
    entries: HashMap<String, ExistingTrade>,
}

impl ExistingTradeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later inserts win when two pages share a truncated open time.
    pub fn insert(&mut self, open_time: &str, trade: ExistingTrade) {
        let key = truncate_open_time(open_time).to_string();
        if let Some(previous) = self.entries.insert(key.clone(), trade) {
            debug!(
                open_time = %key,
                replaced_page = %previous.page_id,
                "Duplicate open time in index"
            );
        }
    }

    pub fn lookup(&self, open_time: &str) -> Option<&ExistingTrade> {
        self.entries.get(truncate_open_time(open_time))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Drops everything from the first `.` onward, so
/// `2024-09-13T20:50:00.000+00:00` keys as `2024-09-13T20:50:00`.
pub fn truncate_open_time(open_time: &str) -> &str {
    open_time
        .split_once('.')
        .map(|(whole, _)| whole)
        .unwrap_or(open_time)
}
