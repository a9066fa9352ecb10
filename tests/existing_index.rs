mod common;

use common::*;
use fxbook_notion_sync::notion::fetch_existing_trades;
use serde_json::json;

#[tokio::test]
async fn builds_index_and_skips_malformed_pages() {
    let myfxbook = mockito::Server::new_async().await;
    let mut notion_server = mockito::Server::new_async().await;
    let query = notion_server
        .mock("POST", format!("/v1/databases/{}/query", DB_ID).as_str())
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "object": "list",
                "results": [
                    {
                        "id": "page-1",
                        "properties": {
                            "Open Time": { "date": { "start": "2024-09-13T20:50:00.000+00:00" } },
                            "Trade Type": { "rich_text": [{ "text": { "content": "open" } }] }
                        }
                    },
                    {
                        "id": "page-2",
                        "properties": {
                            "Open Time": { "date": null },
                            "Trade Type": { "rich_text": [{ "text": { "content": "history" } }] }
                        }
                    },
                    {
                        "id": "page-3",
                        "properties": {
                            "Open Time": { "date": { "start": "2024-09-12T08:15:00.000+00:00" } },
                            "Trade Type": { "rich_text": [] }
                        }
                    }
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let config = config(&myfxbook, &notion_server);
    let (_, notion) = clients(&config);

    let index = fetch_existing_trades(&notion).await;

    assert_eq!(index.len(), 1);
    let found = index.lookup("2024-09-13T20:50:00").unwrap();
    assert_eq!(found.page_id, "page-1");
    assert_eq!(found.status, "open");
    query.assert_async().await;
}

#[tokio::test]
async fn query_failure_degrades_to_empty_index() {
    let myfxbook = mockito::Server::new_async().await;
    let mut notion_server = mockito::Server::new_async().await;
    let query = notion_server
        .mock("POST", format!("/v1/databases/{}/query", DB_ID).as_str())
        .with_status(500)
        .with_body("internal error")
        .expect(1)
        .create_async()
        .await;

    let config = config(&myfxbook, &notion_server);
    let (_, notion) = clients(&config);

    let index = fetch_existing_trades(&notion).await;

    assert!(index.is_empty());
    query.assert_async().await;
}
