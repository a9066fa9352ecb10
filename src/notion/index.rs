//! Builds the existing-trade index from the Notion database

use serde_json::Value;
use tracing::{error, info, warn};
use crate::types::{ExistingTrade, ExistingTradeIndex};
use super::client::NotionClient;
use super::properties::{OPEN_TIME, TRADE_TYPE};

/// Lists every page in the database and indexes it by open time.
///
/// A failed query degrades to an empty index: every trade in the cycle is
/// then treated as new.
pub async fn fetch_existing_trades(notion: &NotionClient) -> ExistingTradeIndex {
    let records = match notion.query_database().await {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to query Notion DB: {}", e);
            return ExistingTradeIndex::new();
        }
    };

    let index = index_records(&records);
    info!(
        records = records.len(),
        indexed = index.len(),
        "Loaded existing trades from Notion"
    );
    index
}

pub fn index_records(records: &[Value]) -> ExistingTradeIndex {
    let mut index = ExistingTradeIndex::new();
    for record in records {
        match parse_record(record) {
            Some((open_time, trade)) => index.insert(&open_time, trade),
            None => warn!(
                page_id = record["id"].as_str().unwrap_or("?"),
                "Error parsing trade from Notion: missing open time, trade type or id"
            ),
        }
    }
    index
}

fn parse_record(record: &Value) -> Option<(String, ExistingTrade)> {
    let properties = record.get("properties")?;
    let open_time = properties.get(OPEN_TIME)?.pointer("/date/start")?.as_str()?;
    let status = properties
        .get(TRADE_TYPE)?
        .pointer("/rich_text/0/text/content")?
        .as_str()?;
    let page_id = record.get("id")?.as_str()?;

    Some((
        open_time.to_string(),
        ExistingTrade {
            status: status.to_string(),
            page_id: page_id.to_string(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(id: &str, open_time: Value, trade_type: Value) -> Value {
        json!({
            "id": id,
            "properties": {
                "Open Time": { "date": open_time },
                "Trade Type": { "rich_text": trade_type },
            }
        })
    }

    #[test]
    fn indexes_well_formed_pages() {
        let records = vec![page(
            "page-1",
            json!({ "start": "2024-09-13T20:50:00.000+00:00" }),
            json!([{ "text": { "content": "open" } }]),
        )];

        let index = index_records(&records);
        let found = index.lookup("2024-09-13T20:50:00").unwrap();
        assert_eq!(found.page_id, "page-1");
        assert_eq!(found.status, "open");
    }

    #[test]
    fn skips_pages_missing_fields() {
        let records = vec![
            page("no-date", Value::Null, json!([{ "text": { "content": "open" } }])),
            page("no-type", json!({ "start": "2024-09-13T20:50:00" }), json!([])),
            json!({ "properties": {} }),
            page(
                "good",
                json!({ "start": "2024-09-14T08:00:00" }),
                json!([{ "text": { "content": "history" } }]),
            ),
        ];

        let index = index_records(&records);
        assert_eq!(index.len(), 1);
        assert!(index.lookup("2024-09-14T08:00:00").is_some());
    }
}
