use std::time::Duration;

use thiserror::Error;

use crate::wire::{WireRequest, WireResponse};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("{0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Delivers a request to the solver service and reads its reply
pub trait Transport {
    fn post(&self, url: &str, request: &WireRequest) -> Result<WireResponse, TransportError>;
}

/// JSON-over-HTTP transport.
///
/// Calls block until the service answers or the connection fails. No timeout
/// is applied unless one is configured.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, request: &WireRequest) -> Result<WireResponse, TransportError> {
        tracing::debug!(component = "transport", operation = "post", url, "Sending request");

        let response = self
            .agent
            .post(url)
            .set("Content-Type", "application/json")
            .send_json(request)
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => TransportError::Status(code),
                ureq::Error::Transport(t) => TransportError::Network(t.to_string()),
            })?;

        response
            .into_json::<WireResponse>()
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
