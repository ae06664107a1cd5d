//! Request logging middleware.
//!
//! Logs one line per request once the response is ready: method, status,
//! path and request id. For POST, PUT and PATCH the request body is logged
//! too, so it has to be buffered here before the handler sees it.

use axum::{
    body::{self, Body},
    extract::Request,
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::info;

use super::error::ApiError;
use super::REQUEST_ID_HEADER;

/// Largest body the middleware will buffer, matching axum's default body limit.
pub const BODY_LIMIT: usize = 2 * 1024 * 1024;

pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let (request, logged_body) = if has_logged_body(&method) {
        let (parts, body) = request.into_parts();
        let bytes = match body::to_bytes(body, BODY_LIMIT).await {
            Ok(bytes) => bytes,
            Err(_) => {
                let response =
                    ApiError::PayloadTooLarge("Request body too large".to_string()).into_response();
                info!(%method, status = response.status().as_u16(), %path, %request_id, "request");
                return response;
            }
        };
        let logged = body_for_log(&bytes);
        (Request::from_parts(parts, Body::from(bytes)), Some(logged))
    } else {
        (request, None)
    };

    let response = next.run(request).await;
    let status = response.status().as_u16();

    match logged_body {
        Some(body) => info!(%method, status, %path, %request_id, %body, "request"),
        None => info!(%method, status, %path, %request_id, "request"),
    }

    response
}

fn has_logged_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// JSON bodies are logged compacted; anything else lossily as text.
fn body_for_log(bytes: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(value) => value.to_string(),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_mutating_methods_log_bodies() {
        assert!(has_logged_body(&Method::POST));
        assert!(has_logged_body(&Method::PATCH));
        assert!(!has_logged_body(&Method::GET));
        assert!(!has_logged_body(&Method::DELETE));
    }

    #[test]
    fn test_body_for_log() {
        assert_eq!(body_for_log(b"{ \"price\" : 400 }"), r#"{"price":400}"#);
        assert_eq!(body_for_log(b"not json"), "not json");
        assert_eq!(body_for_log(b""), "");
    }
}
