//! Trade-age cutoff for history listings

use chrono::NaiveDateTime;
use tracing::{debug, warn};
use crate::{types::SourceTrade, utils::parse_source_time};

/// Keeps trades that closed at or after `boundary` (platform local time).
/// Trades without a parseable close time are dropped.
pub fn filter_recent_history(
    trades: Vec<SourceTrade>,
    boundary: NaiveDateTime,
) -> Vec<SourceTrade> {
    let before = trades.len();
    let kept: Vec<SourceTrade> = trades
        .into_iter()
        .filter(|trade| match trade.close_time.as_deref().and_then(parse_source_time) {
            Some(closed) => closed >= boundary,
            None => {
                warn!(
                    symbol = trade.symbol_or_unknown(),
                    close_time = ?trade.close_time,
                    "Dropping history trade with unparseable close time"
                );
                false
            }
        })
        .collect();

    debug!(before, after = kept.len(), %boundary, "Filtered history by close time");
    kept
}
