use crate::error::TrellisError;
use crate::exception::{ExceptionFilter, HttpException};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::error::Error;

/// Default exception filter: renders errors as a JSON body with the status
/// they carry, or 500 for anything it does not recognize.
#[derive(Default)]
pub struct HttpExceptionFilter;

impl HttpExceptionFilter {
    fn classify(error: &(dyn Error + Send + Sync + 'static)) -> (StatusCode, String) {
        if let Some(exception) = error.downcast_ref::<HttpException>() {
            return (exception.status(), exception.message().to_string());
        }
        if let Some(trellis_error) = error.downcast_ref::<TrellisError>() {
            return (trellis_error.status(), trellis_error.to_string());
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    }
}

impl ExceptionFilter for HttpExceptionFilter {
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response {
        let (status, message) = Self::classify(&*error);

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Exception intercepted: {}", error);
        } else {
            tracing::debug!(status = status.as_u16(), "Exception intercepted: {}", error);
        }

        (
            status,
            Json(json!({
                "statusCode": status.as_u16(),
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        )
            .into_response()
    }
}
