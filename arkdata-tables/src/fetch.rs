//! Retrieval and decoding shared by the table fetchers.

use arkdata_core::{SchemaError, Transport};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::TableError;
use crate::sources::TableSource;

/// GET `url` and parse the body as JSON.
pub async fn fetch_json(transport: &impl Transport, url: &str) -> Result<Value, TableError> {
    let body = transport.get(url, None).await?;
    serde_json::from_slice(&body).map_err(|e| TableError::json(url, e))
}

/// Fetch the primary and variant documents of `source` concurrently.
pub async fn fetch_pair(
    transport: &impl Transport,
    source: &TableSource,
) -> Result<(Value, Value), TableError> {
    log::debug!("Fetching {}", source.name);
    tokio::try_join!(
        fetch_json(transport, source.primary),
        fetch_json(transport, source.variant)
    )
}

/// Decode a validated document into its typed shape.
pub fn decode<T: DeserializeOwned>(table: &str, value: Value) -> Result<T, SchemaError> {
    serde_json::from_value(value).map_err(|e| SchemaError::decode(table, e))
}
