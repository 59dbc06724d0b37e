//! The network seam. Table fetchers and the image pipeline only ever talk to
//! a `Transport`, so they can be driven by canned bodies in tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::FetchError;

/// Retrieves raw response bodies.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// GET `url`, optionally sending an `Accept` header, and return the body
    /// of a successful response. Non-success statuses are errors.
    async fn get(&self, url: &str, accept: Option<&str>) -> Result<Vec<u8>, FetchError>;
}

/// Serves canned bodies from memory. Unknown URLs answer HTTP 404.
///
/// Every requested URL is recorded, so callers can check what was fetched.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    bodies: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.insert(url, body);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.bodies.insert(url.into(), body.into());
    }

    /// URLs requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        match self.requests.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Transport for MemoryTransport {
    async fn get(&self, url: &str, _accept: Option<&str>) -> Result<Vec<u8>, FetchError> {
        match self.requests.lock() {
            Ok(mut guard) => guard.push(url.to_string()),
            Err(poisoned) => poisoned.into_inner().push(url.to_string()),
        }
        self.bodies.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}
