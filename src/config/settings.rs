//! Sync configuration settings and environment variable handling

use std::env;
use crate::errors::{SyncError, SyncResult};

// Endpoint defaults
pub const DEFAULT_MYFXBOOK_BASE_URL: &str = "https://www.myfxbook.com/api";
pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com";
pub const NOTION_VERSION: &str = "2022-06-28";

// Scheduler Constants
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 30;
pub const MIN_SYNC_INTERVAL_SECS: u64 = 5;
pub const MAX_SYNC_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const MIN_HTTP_TIMEOUT_SECS: u64 = 1;

// Myfxbook reports platform time in Etc/GMT-3, which is UTC+03:00
pub const SOURCE_UTC_OFFSET_SECS: i32 = 3 * 3600;

#[derive(Debug, Clone)]
pub struct Config {
    // Myfxbook Configuration
    pub myfxbook_email: String,
    pub myfxbook_password: String,
    pub myfxbook_account_id: Option<i64>,
    pub myfxbook_base_url: String,
    // Notion Configuration
    pub notion_api_token: String,
    pub notion_db_id: String,
    pub notion_base_url: String,
    // Sync Configuration
    pub filter_old_data: bool,
    pub sync_interval_secs: u64,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            myfxbook_email: env::var("MYFXBOOK_EMAIL").unwrap_or_default(),
            myfxbook_password: env::var("MYFXBOOK_PASSWORD").unwrap_or_default(),
            myfxbook_account_id: env::var("MYFXBOOK_ACCOUNT_ID")
                .ok()
                .and_then(|s| s.trim().parse().ok()),
            myfxbook_base_url: env::var("MYFXBOOK_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_MYFXBOOK_BASE_URL.to_string()),
            notion_api_token: env::var("NOTION_API_TOKEN").unwrap_or_default(),
            notion_db_id: env::var("NOTION_DB_ID").unwrap_or_default(),
            notion_base_url: env::var("NOTION_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_NOTION_BASE_URL.to_string()),
            filter_old_data: env::var("FILTER_OLD_DATA")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            sync_interval_secs: env::var("SYNC_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SYNC_INTERVAL_SECS)
                .max(MIN_SYNC_INTERVAL_SECS)
                .min(MAX_SYNC_INTERVAL_SECS),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
                .max(MIN_HTTP_TIMEOUT_SECS),
        }
    }

    /// Fails on the first setting that is missing, empty or out of range.
    pub fn validate(&self) -> SyncResult<()> {
        let required = [
            ("MYFXBOOK_EMAIL", &self.myfxbook_email),
            ("MYFXBOOK_PASSWORD", &self.myfxbook_password),
            ("NOTION_API_TOKEN", &self.notion_api_token),
            ("NOTION_DB_ID", &self.notion_db_id),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(SyncError::Config {
                    message: format!("{} is required", name),
                });
            }
        }

        if self.myfxbook_account_id.is_none() {
            return Err(SyncError::Config {
                message: "MYFXBOOK_ACCOUNT_ID is required and must be numeric".to_string(),
            });
        }

        // reqwest treats a zero timeout as already expired
        if self.http_timeout_secs < MIN_HTTP_TIMEOUT_SECS {
            return Err(SyncError::Config {
                message: format!(
                    "HTTP_TIMEOUT_SECS must be at least {}",
                    MIN_HTTP_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }
}
