//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use catalog_service::config::CatalogConfig;
use catalog_service::http::{build_router, state::AppState};
use catalog_service::lifecycle::CatalogSystem;

/// Build the full application router from the given environment variables.
///
/// Returns the system too, so tests can shut it down or use its client.
pub fn build_test_app(vars: &[(&str, &str)]) -> (Router, CatalogSystem) {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = CatalogConfig::from_lookup(|name| vars.get(name).cloned())
        .expect("test configuration must be valid");

    let system = CatalogSystem::new(&config);
    let state = AppState::new(system.instrument_client.clone(), config.profile.clone());
    (build_router(state, &config), system)
}

/// The instruments profile with its ten sample records.
pub fn instruments_app() -> Router {
    build_test_app(&[]).0
}

/// The products profile with the three sample products.
pub fn products_app() -> Router {
    build_test_app(&[("CATALOG_PROFILE", "products")]).0
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: &Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// The id of a record as it appears in a URL.
pub fn id_segment(record: &serde_json::Value) -> String {
    match &record["id"] {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
