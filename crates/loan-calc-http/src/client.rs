use loan_calc_core::validation::{validate_loan_form, LoanForm};
use loan_calc_core::{LoanRequest, LoanResponse};
use reqwest::Client;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, NetworkError};

/// Client for `POST /api/loans/calculate`.
///
/// Requests are validated before anything is sent. A request that times out
/// or fails to connect is retried once when the config allows it; a non-2xx
/// response is surfaced as-is and never retried.
#[derive(Debug, Clone)]
pub struct LoanClient {
    http: Client,
    endpoint: Url,
    retry_transient: bool,
}

impl LoanClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let endpoint = config.endpoint_url()?;
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            endpoint,
            retry_transient: config.retry_transient,
        })
    }

    /// Validate raw form input, then calculate.
    pub async fn submit_form(&self, form: &LoanForm) -> Result<LoanResponse, ClientError> {
        let request = validate_loan_form(form)?;
        self.calculate(&request).await
    }

    /// Send a typed request to the service.
    pub async fn calculate(&self, request: &LoanRequest) -> Result<LoanResponse, ClientError> {
        request.validate()?;

        tracing::debug!(endpoint = %self.endpoint, "sending calculate request");
        let response = match self.send(request).await {
            Err(e) if self.retry_transient && is_transient(&e) => {
                tracing::warn!(error = %e, "transient failure, retrying once");
                self.send(request).await?
            }
            result => result?,
        };

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        let body = response.text().await?;

        if !status.is_success() {
            return Err(NetworkError::Status {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            }
            .into());
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn send(&self, request: &LoanRequest) -> reqwest::Result<reqwest::Response> {
        self.http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
    }
}

fn is_transient(e: &reqwest::Error) -> bool {
    e.is_timeout() || e.is_connect()
}

/// The message to show for a failed response: the `error` field of a JSON
/// body, else the raw body text, else a status fallback.
fn error_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("Request failed with status {status}");
    }
    serde_json::from_str::<serde_json::Value>(trimmed)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_json_error_field() {
        assert_eq!(error_message(400, r#"{"error":"term out of range"}"#), "term out of range");
    }

    #[test]
    fn test_error_message_plain_text() {
        assert_eq!(error_message(500, "Internal failure\n"), "Internal failure");
        assert_eq!(error_message(422, r#"{"detail":"x"}"#), r#"{"detail":"x"}"#);
    }

    #[test]
    fn test_error_message_empty_body() {
        assert_eq!(error_message(503, "  "), "Request failed with status 503");
    }
}
