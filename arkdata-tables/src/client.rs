use std::time::Duration;

use arkdata_core::{FetchError, Transport};

use crate::error::TableError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The GitHub API rejects requests without a user agent.
const USER_AGENT: &str = concat!("arkdata/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TableError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TableError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str, accept: Option<&str>) -> Result<Vec<u8>, FetchError> {
        let mut request = self.http.get(url);
        if let Some(accept) = accept {
            request = request.header(reqwest::header::ACCEPT, accept);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FetchError::transport(url, e.to_string()))?;
        log::debug!("GET {url}: {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}
