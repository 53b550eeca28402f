use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

use crate::error::ClientError;
use crate::CALCULATE_PATH;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the calculation service listens.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind: SocketAddr,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

/// How the client reaches the calculation service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme, host and optional path prefix; the endpoint path is appended.
    pub base_url: String,
    pub timeout: Duration,
    /// Retry once when the request times out or cannot connect.
    pub retry_transient: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_transient: true,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the calculation endpoint.
    pub fn endpoint_url(&self) -> Result<Url, ClientError> {
        let joined = format!("{}{}", self.base_url.trim_end_matches('/'), CALCULATE_PATH);
        Url::parse(&joined).map_err(|e| ClientError::Config {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })
    }
}
