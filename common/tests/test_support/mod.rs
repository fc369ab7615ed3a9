#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use common::api::{ApiClient, Transport};
use common::config::ApiConfig;
use common::error::ApiError;
use serde_json::Value;

pub const BASE_URL: &str = "http://api.test";

/// In-memory transport keyed by absolute URL. Unrouted URLs answer 404.
#[derive(Default)]
pub struct FakeTransport {
    json: RefCell<HashMap<String, Result<Value, ApiError>>>,
    bytes: RefCell<HashMap<String, Vec<u8>>>,
    calls: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn route(&self, path: &str, payload: Value) {
        self.json
            .borrow_mut()
            .insert(format!("{BASE_URL}{path}"), Ok(payload));
    }

    pub fn fail(&self, path: &str, err: ApiError) {
        self.json
            .borrow_mut()
            .insert(format!("{BASE_URL}{path}"), Err(err));
    }

    pub fn route_bytes(&self, path: &str, body: &[u8]) {
        self.bytes
            .borrow_mut()
            .insert(format!("{BASE_URL}{path}"), body.to_vec());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, url: &str) {
        self.calls.borrow_mut().push(url.to_string());
    }

    fn not_found(url: &str) -> ApiError {
        ApiError::Status {
            status: 404,
            body: format!("no route for {url}"),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn get_json(&self, url: &str, _timeout_ms: u32) -> Result<Value, ApiError> {
        self.record(url);
        self.json
            .borrow()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(Self::not_found(url)))
    }

    async fn get_bytes(&self, url: &str, _timeout_ms: u32) -> Result<Vec<u8>, ApiError> {
        self.record(url);
        self.bytes
            .borrow()
            .get(url)
            .cloned()
            .ok_or_else(|| Self::not_found(url))
    }
}

pub fn client() -> ApiClient<FakeTransport> {
    let config = ApiConfig::new(format!("{BASE_URL}/"), 5_000).expect("config");
    ApiClient::new(config, FakeTransport::default())
}

/// Borrow of the fake behind a client, for routing and inspecting calls.
pub fn transport(client: &ApiClient<FakeTransport>) -> &FakeTransport {
    client.transport()
}
