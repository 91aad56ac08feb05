//! Request gateway: the single point of entry for every backend call.
//!
//! ARCHITECTURAL RULE: pages never build HTTP requests themselves.
//! All traffic goes through a `Gateway`, which lets tests script the backend.
//!
//! One call is one exchange: no retry, no backoff, no cache, no timeout.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod endpoints;

pub use endpoints::{Endpoint, Method};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait Gateway: Send + Sync {
    /// Performs exactly one request/response exchange against `endpoint`.
    async fn exchange(&self, endpoint: Endpoint, body: Option<Value>)
        -> Result<Value, GatewayError>;
}

/// Serializes `body`, calls the endpoint, and deserializes the response.
pub async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    gateway: &dyn Gateway,
    endpoint: Endpoint,
    body: &B,
) -> Result<T, GatewayError> {
    let body = serde_json::to_value(body)?;
    let value = gateway.exchange(endpoint, Some(body)).await?;
    Ok(serde_json::from_value(value)?)
}

/// Production gateway over plain HTTP/JSON.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn exchange(
        &self,
        endpoint: Endpoint,
        body: Option<Value>,
    ) -> Result<Value, GatewayError> {
        let url = format!("{}{}", self.base_url, endpoint.path());

        let mut request = match endpoint.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("{endpoint} transport failure: {e}");
                return Err(GatewayError::Http(e));
            }
        };

        let status = response.status();
        debug!("{endpoint} -> {status}");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{endpoint} returned {status}");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
