use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::error::Error;

pub mod http;

pub use http::HttpExceptionFilter;

/// An error that carries the HTTP status it should be answered with.
///
/// Helpers raise these for faults that are the host application's fault rather
/// than the client's, e.g. a `"view"` service that does not implement
/// [`View`](crate::view::View).
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct HttpException {
    status: StatusCode,
    message: String,
}

impl HttpException {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_internal_server_error(&self) -> bool {
        self.status == StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for HttpException {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

/// The ExceptionFilter trait
///
/// Filters turn errors raised while handling a request into a response.
pub trait ExceptionFilter: Send + Sync + 'static {
    /// Catch an exception and return a response
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response;
}
