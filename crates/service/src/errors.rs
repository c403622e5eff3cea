use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("api client error: {0}")]
    Client(#[from] client::errors::ClientError),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    /// The string a caller should put in front of the user: the server
    /// message when there is one, a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Client(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}
