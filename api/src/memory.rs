//! In-memory [`PresenceSource`] used for tests and offline demos.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::{ApiError, ApiResult};
use crate::source::PresenceSource;

/// Canned responses keyed by endpoint. Endpoints without an entry answer
/// 404, like the backend does for unknown users.
#[derive(Debug, Default)]
pub struct MemorySource {
    responses: HashMap<Endpoint, Result<Value, ApiError>>,
    requests: RefCell<Vec<Endpoint>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, endpoint: Endpoint, body: Value) -> Self {
        self.responses.insert(endpoint, Ok(body));
        self
    }

    pub fn with_error(mut self, endpoint: Endpoint, error: ApiError) -> Self {
        self.responses.insert(endpoint, Err(error));
        self
    }

    /// Endpoints requested so far, oldest first.
    pub fn requests(&self) -> Vec<Endpoint> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PresenceSource for MemorySource {
    async fn fetch_json(&self, endpoint: Endpoint) -> ApiResult<Value> {
        self.requests.borrow_mut().push(endpoint);
        match self.responses.get(&endpoint) {
            Some(response) => response.clone(),
            None => Err(ApiError::NotFound),
        }
    }
}
