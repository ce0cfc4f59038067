use crate::exception::HttpException;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrellisError>;

#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Service not found: {id}")]
    ServiceNotFound { id: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Invalid value for header {name}: {value:?}")]
    InvalidHeaderValue { name: String, value: String },

    #[error(transparent)]
    Http(#[from] HttpException),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TrellisError {
    /// Status code this error maps to when it reaches the client.
    pub fn status(&self) -> axum::http::StatusCode {
        match self {
            TrellisError::Http(exception) => exception.status(),
            _ => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl axum::response::IntoResponse for TrellisError {
    fn into_response(self) -> axum::response::Response {
        match self {
            TrellisError::Http(exception) => exception.into_response(),
            other => (other.status(), other.to_string()).into_response(),
        }
    }
}
