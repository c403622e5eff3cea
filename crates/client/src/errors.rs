use reqwest::StatusCode;
use thiserror::Error;

/// Shown when the API gives us nothing better.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("api error: {message}")]
    Api {
        /// HTTP status when the failure came from a non-2xx response;
        /// `None` when a 2xx body carried `success: false`.
        status: Option<StatusCode>,
        message: String,
    },
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn api_message(message: impl Into<String>) -> Self {
        ClientError::Api { status: None, message: message.into() }
    }

    /// The string a caller should surface to the user.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}
