use meeting_interfaces::api::error::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Server error: {0}")]
    ServerError(#[from] ServerError),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
