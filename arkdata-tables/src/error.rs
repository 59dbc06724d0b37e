use arkdata_core::{FetchError, SchemaError};
use thiserror::Error;

/// Errors that abort a table fetch.
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A join between two tables found no target record.
    #[error("{table}: no {target} for '{id}'")]
    Lookup {
        table: &'static str,
        id: String,
        target: &'static str,
    },

    #[error("empty commit hash from {url}")]
    EmptyHash { url: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl TableError {
    pub fn json(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            url: url.into(),
            source,
        }
    }

    pub fn lookup(table: &'static str, id: impl Into<String>, target: &'static str) -> Self {
        Self::Lookup {
            table,
            id: id.into(),
            target,
        }
    }
}
