use loan_calc_core::ValidationError;
use thiserror::Error;

/// The request left the client but did not produce a usable response.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Non-2xx status; `message` is the body text or a status fallback.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid API base URL '{url}': {reason}")]
    Config { url: String, reason: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Network(NetworkError::Transport(e))
    }
}
