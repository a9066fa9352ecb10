//! Trade reconciliation: create new pages, patch existing ones

use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};
use crate::{
    notion::{properties::*, NotionClient, PropertyBuilder, PropertyValue},
    types::{ExistingTrade, ExistingTradeIndex, SourceTrade, TradeAction, TradeKind},
    utils::convert_to_utc,
};

#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    Created { page_id: String },
    Updated { page_id: String },
    /// Not a Buy/Sell entry; nothing was written.
    Skipped,
    Failed,
}

/// Builds the page properties for one trade.
///
/// `Trade Type`, `Open Time`, `Action` and `Balance` are always present.
/// Every other field is written only when non-empty and non-zero.
pub fn trade_properties(
    trade: &SourceTrade,
    action: TradeAction,
    kind: TradeKind,
    balance: f64,
    open_time: Option<String>,
    close_time: Option<String>,
) -> Map<String, Value> {
    let sizing = trade.sizing.as_ref();

    PropertyBuilder::new()
        .field(TRADE_TYPE, Some(PropertyValue::RichText(kind.as_str().to_string())))
        .field(OPEN_TIME, Some(PropertyValue::Date(open_time)))
        .field(ACTION, Some(PropertyValue::Select(action.as_str().to_string())))
        .field(BALANCE, Some(PropertyValue::Number(balance)))
        .text(SYMBOL, trade.symbol.as_deref())
        .number(OPEN_PRICE, trade.open_price)
        .number(CLOSE_PRICE, trade.close_price)
        .number(PROFIT, trade.profit)
        .date(CLOSE_TIME, close_time)
        .text(SIZING_TYPE, sizing.and_then(|s| s.sizing_type.as_deref()))
        .number(SIZING_VALUE, sizing.and_then(|s| s.value))
        .number(TAKE_PROFIT, trade.tp)
        .number(STOP_LOSS, trade.sl)
        .number(PIPS, trade.pips)
        .number(INTEREST, trade.interest)
        .number(COMMISSION, trade.commission)
        .text(COMMENT, trade.comment.as_deref())
        .build()
}

/// Writes one trade to Notion, patching the page whose open time matches to
/// the second, or creating a new page otherwise.
///
/// Errors are logged and reported as [`UpsertOutcome::Failed`] so the caller
/// can carry on with the next trade.
pub async fn upsert_trade(
    notion: &NotionClient,
    index: &mut ExistingTradeIndex,
    trade: &SourceTrade,
    balance: f64,
    kind: TradeKind,
) -> UpsertOutcome {
    let Some(action) = trade.trade_action() else {
        debug!(action = ?trade.action, "Skipping non-directional entry");
        return UpsertOutcome::Skipped;
    };

    let open_time = trade.open_time.as_deref().and_then(convert_to_utc);
    let close_time = trade
        .close_time
        .as_deref()
        .filter(|s| !s.is_empty())
        .and_then(convert_to_utc);

    if open_time.is_none() {
        warn!(
            symbol = trade.symbol_or_unknown(),
            raw = ?trade.open_time,
            "Trade has no usable open time"
        );
    }

    let existing = open_time
        .as_deref()
        .and_then(|t| index.lookup(t))
        .map(|e| e.page_id.clone());
    let properties =
        trade_properties(trade, action, kind, balance, open_time.clone(), close_time);
    let symbol = trade.symbol_or_unknown();

    match existing {
        Some(page_id) => match notion.update_page(&page_id, properties).await {
            Ok(()) => {
                info!(
                    symbol,
                    page_id = %page_id,
                    kind = %kind,
                    "Successfully updated trade in Notion"
                );
                UpsertOutcome::Updated { page_id }
            }
            Err(e) => {
                error!(symbol, page_id = %page_id, "Failed to update trade: {}", e);
                UpsertOutcome::Failed
            }
        },
        None => match notion.create_page(properties).await {
            Ok(page_id) => {
                info!(
                    symbol,
                    page_id = %page_id,
                    kind = %kind,
                    "Successfully created trade in Notion"
                );
                if let Some(open_time) = open_time.as_deref() {
                    index.insert(
                        open_time,
                        ExistingTrade {
                            status: kind.as_str().to_string(),
                            page_id: page_id.clone(),
                        },
                    );
                }
                UpsertOutcome::Created { page_id }
            }
            Err(e) => {
                error!(symbol, "Failed to create trade: {}", e);
                UpsertOutcome::Failed
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sizing;
    use serde_json::json;

    fn eurusd() -> SourceTrade {
        SourceTrade {
            open_time: Some("09/13/2024 23:50".to_string()),
            symbol: Some("EURUSD".to_string()),
            action: Some("Buy".to_string()),
            open_price: Some(1.1),
            profit: Some(0.0),
            ..Default::default()
        }
    }

    #[test]
    fn required_fields_always_present() {
        let props = trade_properties(
            &SourceTrade::default(),
            TradeAction::Sell,
            TradeKind::History,
            250.0,
            None,
            None,
        );

        assert_eq!(props.len(), 4);
        assert_eq!(
            props[TRADE_TYPE],
            json!({ "rich_text": [{ "text": { "content": "history" } }] })
        );
        assert_eq!(props[OPEN_TIME], json!({ "date": { "start": null } }));
        assert_eq!(props[ACTION], json!({ "select": { "name": "Sell" } }));
        assert_eq!(props[BALANCE], json!({ "number": 250.0 }));
    }

    #[test]
    fn zero_profit_omitted_nonzero_price_kept() {
        let props = trade_properties(
            &eurusd(),
            TradeAction::Buy,
            TradeKind::Open,
            1000.0,
            Some("2024-09-13T20:50:00".to_string()),
            None,
        );

        assert!(!props.contains_key(PROFIT));
        assert!(!props.contains_key(CLOSE_TIME));
        assert_eq!(props[OPEN_PRICE], json!({ "number": 1.1 }));
        assert_eq!(props[OPEN_TIME], json!({ "date": { "start": "2024-09-13T20:50:00" } }));
    }

    #[test]
    fn optional_fields_written_when_present() {
        let trade = SourceTrade {
            close_price: Some(1.2),
            tp: Some(1.25),
            sl: Some(1.05),
            pips: Some(-3.4),
            interest: Some(-0.5),
            commission: Some(-7.0),
            comment: Some("manual close".to_string()),
            sizing: Some(Sizing {
                sizing_type: Some("lots".to_string()),
                value: Some(0.1),
            }),
            ..eurusd()
        };

        let props = trade_properties(
            &trade,
            TradeAction::Buy,
            TradeKind::History,
            1000.0,
            Some("2024-09-13T20:50:00".to_string()),
            Some("2024-09-14T10:00:00".to_string()),
        );

        assert_eq!(props[CLOSE_TIME], json!({ "date": { "start": "2024-09-14T10:00:00" } }));
        assert_eq!(props[SIZING_TYPE], json!({ "rich_text": [{ "text": { "content": "lots" } }] }));
        assert_eq!(props[SIZING_VALUE], json!({ "number": 0.1 }));
        assert_eq!(props[PIPS], json!({ "number": -3.4 }));
        assert_eq!(props[COMMISSION], json!({ "number": -7.0 }));
        assert_eq!(
            props[COMMENT],
            json!({ "rich_text": [{ "text": { "content": "manual close" } }] })
        );
        assert_eq!(props.len(), 16);
    }
}
