//! Shared HTTP client setup

use std::time::Duration;
use reqwest::Client;
use tracing::warn;
use crate::{
    config::Config,
    errors::{SyncError, SyncResult},
};

pub fn build_http_client(config: &Config) -> SyncResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()
        .map_err(|e| {
            warn!("⚠️ Failed to initialize HTTP client: {}", e);
            SyncError::network("Failed to build HTTP client", e)
        })
}
