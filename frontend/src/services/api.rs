//! Browser side of the API client: a `Transport` over `gloo-net` and the
//! shared handle every view receives as a property.

use std::ops::Deref;
use std::pin::pin;
use std::rc::Rc;

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_console::{log, warn};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;

use common::api::{ApiClient, Transport};
use common::config::ApiConfig;
use common::error::ApiError;

pub struct GlooTransport;

impl GlooTransport {
    /// Sends the GET and races it against the configured timeout. The losing
    /// request is dropped, which aborts it on the browser side.
    async fn send(url: &str, timeout_ms: u32) -> Result<Response, ApiError> {
        let request = pin!(Request::get(url).send());
        let timeout = pin!(TimeoutFuture::new(timeout_ms));

        let response = match select(request, timeout).await {
            Either::Left((result, _)) => {
                result.map_err(|err| ApiError::Network(err.to_string()))?
            }
            Either::Right(_) => return Err(ApiError::Timeout(timeout_ms)),
        };

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get_json(&self, url: &str, timeout_ms: u32) -> Result<Value, ApiError> {
        Self::send(url, timeout_ms)
            .await?
            .json::<Value>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn get_bytes(&self, url: &str, timeout_ms: u32) -> Result<Vec<u8>, ApiError> {
        Self::send(url, timeout_ms)
            .await?
            .binary()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
}

/// Cheap to clone; views move a clone into each spawned request.
#[derive(Clone)]
pub struct ApiHandle(Rc<ApiClient<GlooTransport>>);

impl ApiHandle {
    pub fn new(config: ApiConfig) -> Self {
        Self(Rc::new(ApiClient::new(config, GlooTransport)))
    }

    /// Configuration baked in at build time through `DASHBOARD_API_URL` and
    /// `DASHBOARD_API_TIMEOUT_MS`.
    pub fn from_build_env() -> Self {
        let config = ApiConfig::from_overrides(
            option_env!("DASHBOARD_API_URL"),
            option_env!("DASHBOARD_API_TIMEOUT_MS"),
        )
        .unwrap_or_else(|err| {
            warn!(format!("{}; falling back to the default API location", err));
            ApiConfig::default()
        });
        log!(format!(
            "results API at {} ({} ms timeout)",
            config.base_url(),
            config.timeout_ms()
        ));
        Self::new(config)
    }
}

impl Deref for ApiHandle {
    type Target = ApiClient<GlooTransport>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
