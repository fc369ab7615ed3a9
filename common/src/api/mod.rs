//! Client for the results API.
//!
//! [`ApiClient`] maps each dashboard operation to one GET request and
//! decodes the answer into the canonical records of [`crate::model`]. The
//! actual HTTP call is delegated to a [`Transport`], implemented by the
//! browser frontend and by an in-memory fake in tests.

mod client;
mod endpoint;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;

pub use client::{student_workbook_name, subject_workbook_name, ApiClient};
pub use endpoint::Endpoint;

/// One HTTP GET with a fixed timeout.
///
/// Implementations map network failures, timeouts and non-2xx statuses to the
/// matching [`ApiError`] variant. No retries, no caching.
#[async_trait(?Send)]
pub trait Transport {
    async fn get_json(&self, url: &str, timeout_ms: u32) -> Result<Value, ApiError>;

    async fn get_bytes(&self, url: &str, timeout_ms: u32) -> Result<Vec<u8>, ApiError>;
}
