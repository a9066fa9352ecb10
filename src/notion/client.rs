//! Notion database and page endpoints

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde_json::{json, Map, Value};
use crate::{
    config::{Config, NOTION_VERSION},
    errors::{SyncError, SyncResult},
};

pub struct NotionClient {
    http: Client,
    base_url: String,
    database_id: String,
    headers: HeaderMap,
}

impl NotionClient {
    pub fn new(http: Client, config: &Config) -> SyncResult<Self> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.notion_api_token))
            .map_err(|e| SyncError::Config {
                message: format!("invalid NOTION_API_TOKEN: {}", e),
            })?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert("notion-version", HeaderValue::from_static(NOTION_VERSION));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            http,
            base_url: config.notion_base_url.trim_end_matches('/').to_string(),
            database_id: config.notion_db_id.clone(),
            headers,
        })
    }

    /// Single unfiltered, unpaginated query of the database.
    pub async fn query_database(&self) -> SyncResult<Vec<Value>> {
        let url = format!("{}/v1/databases/{}/query", self.base_url, self.database_id);
        let response = self
            .http
            .post(url)
            .headers(self.headers.clone())
            .json(&json!({}))
            .send()
            .await
            .map_err(|e| SyncError::network("Notion database query failed", e))?;

        let mut body = Self::check(response).await?;
        match body.get_mut("results").map(Value::take) {
            Some(Value::Array(results)) => Ok(results),
            _ => Err(SyncError::parsing(
                "Notion query response",
                anyhow::anyhow!("missing 'results' array"),
            )),
        }
    }

    /// Creates a page in the database and returns its id.
    pub async fn create_page(&self, properties: Map<String, Value>) -> SyncResult<String> {
        let url = format!("{}/v1/pages", self.base_url);
        let payload = json!({
            "parent": { "database_id": self.database_id },
            "properties": properties,
        });

        let response = self
            .http
            .post(url)
            .headers(self.headers.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| SyncError::network("Notion page create failed", e))?;

        let body = Self::check(response).await?;
        body["id"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                SyncError::parsing("Notion create response", anyhow::anyhow!("missing page 'id'"))
            })
    }

    /// Patches only the given properties; others on the page are untouched.
    pub async fn update_page(
        &self,
        page_id: &str,
        properties: Map<String, Value>,
    ) -> SyncResult<()> {
        let url = format!("{}/v1/pages/{}", self.base_url, page_id);
        let response = self
            .http
            .patch(url)
            .headers(self.headers.clone())
            .json(&json!({ "properties": properties }))
            .send()
            .await
            .map_err(|e| SyncError::network("Notion page update failed", e))?;

        Self::check(response).await?;
        Ok(())
    }

    async fn check(response: Response) -> SyncResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Store {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SyncError::parsing("Notion response body", e))
    }
}
