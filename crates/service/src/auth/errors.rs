use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("account already exists")]
    Conflict,
    #[error("invalid credentials")]
    Unauthorized,
    #[error("identity provider error: {0}")]
    Provider(String),
}
