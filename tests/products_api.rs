//! Integration tests for the `products` profile: minimal schema, timestamp
//! ids, Russian error texts.

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn create_product_returns_201_with_id() {
    let app = products_app();

    let response = post_json(&app, "/products", r#"{"name":"Latte","price":300}"#).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["id"].is_u64(), "timestamp ids are numbers: {json}");
    assert_eq!(json["name"], "Latte");
    assert_eq!(json["price"], 300);
    assert_eq!(json.as_object().unwrap().len(), 3, "minimal schema: {json}");
}

#[tokio::test]
async fn create_product_without_price_is_rejected() {
    let app = products_app();

    let response = post_json(&app, "/products", r#"{"name":"Latte"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Не указаны название или цена" })
    );

    // Nothing was stored.
    let list = body_json(get(&app, "/products").await).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_product_with_empty_body_is_missing_fields() {
    let app = products_app();

    let response = send(&app, axum::http::Method::POST, "/products", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Не указаны название или цена"
    );
}

#[tokio::test]
async fn patch_absent_product_returns_404() {
    let app = products_app();

    let response = patch_json(&app, "/products/999", r#"{"price":400}"#).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "Товар не найден" }));
}

#[tokio::test]
async fn empty_collection_lists_as_empty_array() {
    let (app, _system) =
        build_test_app(&[("CATALOG_PROFILE", "products"), ("CATALOG_SEED", "false")]);

    let response = get(&app, "/products").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn seeded_products_keep_their_ids() {
    let app = products_app();

    let list = body_json(get(&app, "/products").await).await;
    assert_eq!(
        list,
        json!([
            { "id": 1, "name": "Капучино", "price": 350 },
            { "id": 2, "name": "Американо", "price": 200 },
            { "id": 3, "name": "Латте", "price": 300 }
        ])
    );
}

#[tokio::test]
async fn delete_existing_product_then_get_is_404() {
    let app = products_app();

    let response = delete(&app, "/products/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = get(&app, "/products/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Товар не найден");

    let response = delete(&app, "/products/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let app = products_app();

    let response = get(&app, "/products/abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Товар не найден");
}

#[tokio::test]
async fn new_ids_increase_and_never_reuse_seed_ids() {
    let app = products_app();
    let mut ids = Vec::new();

    for i in 0..5 {
        let body = json!({ "name": format!("Espresso {i}"), "price": 150 }).to_string();
        let json = body_json(post_json(&app, "/products", &body).await).await;
        ids.push(json["id"].as_u64().unwrap());
    }

    assert!(ids.iter().all(|&id| id > 3));
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "{ids:?}");
}

#[tokio::test]
async fn patch_updates_price_and_keeps_name() {
    let app = products_app();

    let response = patch_json(&app, "/products/2", r#"{"price":"250"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "id": 2, "name": "Американо", "price": 250 })
    );
}

#[tokio::test]
async fn patch_with_only_unknown_fields_is_nothing_to_update() {
    let app = products_app();

    let response = patch_json(&app, "/products/2", r#"{"stock":4}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Нет данных для обновления"
    );
}

#[tokio::test]
async fn root_banner() {
    let app = products_app();

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, "API работает".as_bytes());
}
