/// Status code the server uses for requests that need a signed-in user.
pub const UNAUTHORIZED: u16 = 401;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Server error status={0}, message={1}, url={2}, request={3}")]
    ServerError(u16, String, String, String),

    #[error("Serialization error: {0}")]
    SerializeError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ServerError {
    /// True when the failure means the request lacked a signed-in user and
    /// the caller should raise the sign-in prompt instead of just showing
    /// the error.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ServerError::ServerError(status, ..) if *status == UNAUTHORIZED)
    }
}
