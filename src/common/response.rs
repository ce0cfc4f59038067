use crate::error::{Result, TrellisError};
use axum::{
    body::Body,
    http::{HeaderValue, StatusCode as HttpStatusCode, header},
    response::{Html, IntoResponse, Response},
};

/// Build a `302 Found` response pointing at `uri`.
///
/// The `Location` header carries `uri` unchanged.
///
/// # Errors
/// Returns [`TrellisError::InvalidHeaderValue`] when `uri` contains bytes that
/// cannot appear in a header value (control characters such as `\r` or `\n`).
///
/// # Example
/// ```
/// use trellis::common::response::redirect;
///
/// let response = redirect("/login?next=%2Fadmin").unwrap();
/// assert_eq!(response.status(), 302);
/// assert_eq!(response.headers()["location"], "/login?next=%2Fadmin");
/// ```
pub fn redirect(uri: &str) -> Result<Response> {
    let location =
        HeaderValue::from_str(uri).map_err(|_| TrellisError::InvalidHeaderValue {
            name: header::LOCATION.to_string(),
            value: uri.to_string(),
        })?;

    let mut response = Response::new(Body::empty());
    *response.status_mut() = HttpStatusCode::FOUND;
    response.headers_mut().insert(header::LOCATION, location);
    Ok(response)
}

/// Wrap rendered markup in a `200 OK` HTML response.
pub fn html(body: String) -> Response {
    Html(body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_redirect_sets_status_and_location() {
        let response = redirect("https://example.com/x").unwrap();
        assert_eq!(response.status(), HttpStatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_redirect_accepts_empty_uri() {
        let response = redirect("").unwrap();
        assert_eq!(response.status(), HttpStatusCode::FOUND);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "");
    }

    #[test]
    fn test_redirect_keeps_special_characters() {
        let uri = "/search?q=a%20b&tag=c#frag";
        let response = redirect(uri).unwrap();
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), uri);
    }

    #[test]
    fn test_redirect_rejects_header_injection() {
        let err = redirect("/ok\r\nSet-Cookie: x=1").unwrap_err();
        assert!(matches!(err, TrellisError::InvalidHeaderValue { .. }));
    }

    #[tokio::test]
    async fn test_html_body_is_unchanged() {
        let response = html("<p>héllo ✓</p>".to_string());
        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(body_string(response).await, "<p>héllo ✓</p>");
    }

    #[tokio::test]
    async fn test_html_empty_body() {
        let response = html(String::new());
        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(body_string(response).await, "");
    }
}
