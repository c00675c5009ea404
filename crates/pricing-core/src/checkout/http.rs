//! HTTP Session Client
//!
//! Calls the session creation endpoint with `reqwest`. Works in the browser
//! (WASM) and natively.

use async_trait::async_trait;
use serde::Deserialize;

use super::{CheckoutRequest, SessionCreator, SessionId};
use crate::error::{PricingError, Result};

/// Path of the session creation endpoint on the page's own server
pub const DEFAULT_ENDPOINT_PATH: &str = "/api/create-checkout-session";

/// Origin used when nothing else is configured
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Session endpoint configuration
#[derive(Clone, Debug)]
pub struct CheckoutConfig {
    /// Absolute endpoint URL
    pub endpoint: String,
}

impl CheckoutConfig {
    /// Endpoint on the server at `origin` (e.g. `https://example.com`)
    pub fn for_origin(origin: &str) -> Self {
        Self {
            endpoint: format!("{}{DEFAULT_ENDPOINT_PATH}", origin.trim_end_matches('/')),
        }
    }

    /// `CHECKOUT_ENDPOINT`, or the endpoint on [`DEFAULT_ORIGIN`]
    pub fn from_env() -> Self {
        Self::from_endpoint_var(std::env::var("CHECKOUT_ENDPOINT").ok())
    }

    fn from_endpoint_var(endpoint: Option<String>) -> Self {
        endpoint
            .filter(|e| !e.trim().is_empty())
            .map_or_else(|| Self::for_origin(DEFAULT_ORIGIN), |endpoint| Self { endpoint })
    }
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    #[serde(rename = "sessionId", default)]
    session_id: Option<String>,
}

/// `SessionCreator` backed by the remote endpoint
pub struct HttpSessionClient {
    client: reqwest::Client,
    config: CheckoutConfig,
}

impl HttpSessionClient {
    pub fn new(config: CheckoutConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(CheckoutConfig::from_env())
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait(?Send)]
impl SessionCreator for HttpSessionClient {
    async fn create_session(&self, request: &CheckoutRequest) -> Result<SessionId> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| PricingError::CheckoutRequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PricingError::CheckoutRequestFailed(format!(
                "endpoint returned {status}"
            )));
        }

        let body: SessionResponse = response
            .json()
            .await
            .map_err(|e| PricingError::CheckoutRequestFailed(format!("malformed response: {e}")))?;

        match body.session_id {
            Some(id) if !id.is_empty() => Ok(SessionId::new(id)),
            _ => Err(PricingError::CheckoutRequestFailed(
                "response has no sessionId".into(),
            )),
        }
    }
}
