#![allow(dead_code)]

use fxbook_notion_sync::{
    config::{Config, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SYNC_INTERVAL_SECS},
    myfxbook::MyfxbookClient,
    notion::NotionClient,
};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

pub const ACCOUNT_ID: i64 = 12345;
pub const INTERNAL_ID: i64 = 777;
pub const DB_ID: &str = "db-test";
pub const TOKEN: &str = "secret_token";
pub const SESSION: &str = "tok-1";

pub fn config(myfxbook: &ServerGuard, notion: &ServerGuard) -> Config {
    Config {
        myfxbook_email: "trader@example.com".to_string(),
        myfxbook_password: "hunter2".to_string(),
        myfxbook_account_id: Some(ACCOUNT_ID),
        myfxbook_base_url: format!("{}/api", myfxbook.url()),
        notion_api_token: TOKEN.to_string(),
        notion_db_id: DB_ID.to_string(),
        notion_base_url: notion.url(),
        filter_old_data: false,
        sync_interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
        http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
    }
}

pub fn clients(config: &Config) -> (MyfxbookClient, NotionClient) {
    let http = reqwest::Client::new();
    let myfxbook = MyfxbookClient::new(http.clone(), config);
    let notion = NotionClient::new(http, config).unwrap();
    (myfxbook, notion)
}

pub async fn json_get(server: &mut ServerGuard, path: &str, body: Value, hits: usize) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create_async()
        .await
}

pub async fn login_ok(server: &mut ServerGuard) -> Mock {
    json_get(
        server,
        "/api/login.json",
        json!({ "error": false, "message": "", "session": SESSION }),
        1,
    )
    .await
}

pub async fn logout_ok(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("GET", "/api/logout.json")
        .match_query(Matcher::UrlEncoded("session".into(), SESSION.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": false, "message": "" }).to_string())
        .expect(hits)
        .create_async()
        .await
}

pub async fn empty_database(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", format!("/v1/databases/{}/query", DB_ID).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "object": "list", "results": [] }).to_string())
        .create_async()
        .await
}

pub fn account(balance: f64) -> Value {
    json!({
        "error": false,
        "message": "",
        "accounts": [
            { "id": 1, "accountId": 999, "name": "Other", "balance": 5.0 },
            { "id": INTERNAL_ID, "accountId": ACCOUNT_ID, "name": "Main", "balance": balance }
        ]
    })
}
