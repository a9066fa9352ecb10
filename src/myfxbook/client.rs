//! Myfxbook JSON API client

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};
use crate::{
    config::Config,
    errors::{SyncError, SyncResult},
    types::{
        Account, AccountsResponse, HistoryResponse, LoginResponse, OpenTradesResponse,
        SourceTrade,
    },
};

/// A live Myfxbook session. Obtained from [`MyfxbookClient::login`] and
/// released by passing it back to [`MyfxbookClient::logout`].
#[derive(Debug)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn token(&self) -> &str {
        &self.token
    }
}

pub struct MyfxbookClient {
    http: Client,
    base_url: String,
    email: String,
    password: String,
}

impl MyfxbookClient {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.myfxbook_base_url.trim_end_matches('/').to_string(),
            email: config.myfxbook_email.clone(),
            password: config.myfxbook_password.clone(),
        }
    }

    pub async fn login(&self) -> SyncResult<Session> {
        let login: LoginResponse = self
            .get(
                "login.json",
                &[("email", self.email.as_str()), ("password", self.password.as_str())],
            )
            .await?;

        if login.error {
            return Err(SyncError::Auth { message: login.message });
        }

        match login.session.filter(|s| !s.is_empty()) {
            Some(token) => {
                info!("🔑 Myfxbook login successful");
                Ok(Session { token })
            }
            None => Err(SyncError::Auth {
                message: "login response carried no session".to_string(),
            }),
        }
    }

    pub async fn logout(&self, session: Session) -> SyncResult<()> {
        let response: Value = self
            .get("logout.json", &[("session", session.token())])
            .await?;

        if response["error"].as_bool() == Some(true) {
            return Err(SyncError::Api {
                endpoint: "logout.json".to_string(),
                message: response["message"].as_str().unwrap_or_default().to_string(),
            });
        }

        info!("Logged out of Myfxbook");
        Ok(())
    }

    pub async fn get_my_accounts(&self, session: &Session) -> SyncResult<Vec<Account>> {
        let response: AccountsResponse = self
            .get("get-my-accounts.json", &[("session", session.token())])
            .await?;

        if response.error {
            return Err(SyncError::Api {
                endpoint: "get-my-accounts.json".to_string(),
                message: response.message,
            });
        }

        Ok(decode_records(response.accounts, "get-my-accounts.json", "account"))
    }

    pub async fn get_open_trades(
        &self,
        session: &Session,
        id: i64,
    ) -> SyncResult<Vec<SourceTrade>> {
        let id = id.to_string();
        let response: OpenTradesResponse = self
            .get("get-open-trades.json", &[("session", session.token()), ("id", id.as_str())])
            .await?;

        if response.error {
            return Err(SyncError::Api {
                endpoint: "get-open-trades.json".to_string(),
                message: response.message,
            });
        }

        Ok(decode_records(response.open_trades, "get-open-trades.json", "trade"))
    }

    pub async fn get_history(&self, session: &Session, id: i64) -> SyncResult<Vec<SourceTrade>> {
        let id = id.to_string();
        let response: HistoryResponse = self
            .get("get-history.json", &[("session", session.token()), ("id", id.as_str())])
            .await?;

        if response.error {
            return Err(SyncError::Api {
                endpoint: "get-history.json".to_string(),
                message: response.message,
            });
        }

        Ok(decode_records(response.history, "get-history.json", "trade"))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> SyncResult<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(endpoint, "Myfxbook request");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| SyncError::network(format!("request {} failed", endpoint), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Api {
                endpoint: endpoint.to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SyncError::parsing(format!("decoding {} response", endpoint), e))
    }
}

/// Decodes each entry on its own so one bad record only drops itself.
fn decode_records<T: DeserializeOwned>(raw: Vec<Value>, endpoint: &str, record: &str) -> Vec<T> {
    raw.into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(endpoint, record, error = %e, "Skipping malformed record");
                None
            }
        })
        .collect()
}
