//! Myfxbook response envelopes

use serde::Deserialize;
use super::trade::deserialize_f64_opt;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub session: Option<String>,
}

/// Accounts are kept as raw JSON for the same reason as trades below.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub accounts: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Internal id used by the trade listing endpoints.
    pub id: i64,
    /// Broker account number, matched against `MYFXBOOK_ACCOUNT_ID`.
    pub account_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_f64_opt")]
    pub balance: Option<f64>,
}

/// Trades are kept as raw JSON so one malformed entry can be skipped
/// without losing the rest of the list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenTradesResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub open_trades: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<serde_json::Value>,
}
