//! Custom error types for the sync

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Authentication failed: {message}")]
    Auth {
        message: String,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("API error from {endpoint}: {message}")]
    Api {
        endpoint: String,
        message: String,
    },

    #[error("Store rejected request: {status} - {body}")]
    Store {
        status: u16,
        body: String,
    },

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },
}

pub type SyncResult<T> = Result<T, SyncError>;

impl SyncError {
    pub fn network(message: impl Into<String>, source: reqwest::Error) -> Self {
        SyncError::Network {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn parsing(context: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        SyncError::DataParsing {
            context: context.into(),
            source: source.into(),
        }
    }
}
