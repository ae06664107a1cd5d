//! Integration tests for the `instruments` profile: full schema, random ids.

mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use catalog_service::model::PLACEHOLDER_IMAGE;
use common::*;
use serde_json::json;

const COLLECTION: &str = "/api/instruments";

fn new_guitar() -> serde_json::Value {
    json!({
        "name": "Gibson Les Paul",
        "category": "Гитары",
        "description": "Электрогитара с хамбакерами",
        "price": 150000,
        "stock": "2"
    })
}

async fn create(app: &axum::Router, body: &serde_json::Value) -> serde_json::Value {
    let response = post_json(app, COLLECTION, &body.to_string()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn seeded_instruments_are_listed_in_order() {
    let app = instruments_app();

    let list = body_json(get(&app, COLLECTION).await).await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();

    assert_eq!(names.len(), 10);
    assert_eq!(names[0], "Fender Stratocaster");
    assert_eq!(names[9], "Fender Precision Bass");
    assert_eq!(
        list[0]["image"],
        "http://localhost:3000/images/img1.webp"
    );
}

#[tokio::test]
async fn create_then_get_round_trip_fills_defaults() {
    let app = instruments_app();

    let created = create(&app, &new_guitar()).await;
    let id = id_segment(&created);
    assert_eq!(id.len(), 6);
    assert_eq!(created["price"], 150000);
    assert_eq!(created["stock"], 2);
    assert_eq!(created["rating"], 0);
    assert_eq!(created["image"], PLACEHOLDER_IMAGE);

    let response = get(&app, &format!("{COLLECTION}/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn ids_are_unique_across_creates() {
    let app = instruments_app();
    let mut ids: HashSet<String> = body_json(get(&app, COLLECTION).await)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(id_segment)
        .collect();

    for _ in 0..50 {
        let created = create(&app, &new_guitar()).await;
        assert!(ids.insert(id_segment(&created)), "duplicate id");
    }
}

#[tokio::test]
async fn create_without_required_detail_field_is_rejected() {
    let app = instruments_app();
    let mut body = new_guitar();
    body.as_object_mut().unwrap().remove("category");

    let response = post_json(&app, COLLECTION, &body.to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Missing required fields" })
    );
}

#[tokio::test]
async fn create_with_invalid_price_names_the_field() {
    let app = instruments_app();
    let mut body = new_guitar();
    body["price"] = json!("NaN");

    let response = post_json(&app, COLLECTION, &body.to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Invalid value for field 'price'"
    );
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = instruments_app();

    for body in ["{\"name\":", "[1,2,3]", "42"] {
        let response = post_json(&app, COLLECTION, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(
            body_json(response).await["error"],
            "Request body must be a JSON object"
        );
    }
}

#[tokio::test]
async fn empty_patch_is_nothing_to_update() {
    let app = instruments_app();
    let created = create(&app, &new_guitar()).await;

    let uri = format!("{COLLECTION}/{}", id_segment(&created));
    let response = patch_json(&app, &uri, "{}").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "Nothing to update" }));
}

#[tokio::test]
async fn patch_preserves_untouched_fields_and_is_idempotent() {
    let app = instruments_app();
    let created = create(&app, &new_guitar()).await;
    let uri = format!("{COLLECTION}/{}", id_segment(&created));

    let first = body_json(patch_json(&app, &uri, r#"{"stock":0,"rating":4.5}"#).await).await;
    let second = body_json(patch_json(&app, &uri, r#"{"stock":0,"rating":4.5}"#).await).await;
    assert_eq!(first, second);

    let mut expected = created.clone();
    expected["stock"] = json!(0);
    expected["rating"] = json!(4.5);
    assert_eq!(first, expected);
}

#[tokio::test]
async fn patch_cannot_clear_a_required_field() {
    let app = instruments_app();
    let created = create(&app, &new_guitar()).await;
    let uri = format!("{COLLECTION}/{}", id_segment(&created));

    let response = patch_json(&app, &uri, r#"{"name":"  "}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Invalid value for field 'name'"
    );

    let unchanged = body_json(get(&app, &uri).await).await;
    assert_eq!(unchanged, created);
}

#[tokio::test]
async fn patch_of_absent_id_is_404_even_with_a_bad_body() {
    let app = instruments_app();

    let response = patch_json(&app, &format!("{COLLECTION}/nope42"), "not json").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Instrument not found" })
    );
}

#[tokio::test]
async fn delete_is_final() {
    let app = instruments_app();
    let created = create(&app, &new_guitar()).await;
    let id = id_segment(&created);
    let uri = format!("{COLLECTION}/{id}");

    assert_eq!(delete(&app, &uri).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(get(&app, &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete(&app, &uri).await.status(), StatusCode::NOT_FOUND);

    let list = body_json(get(&app, COLLECTION).await).await;
    assert!(list.as_array().unwrap().iter().all(|i| id_segment(i) != id));

    // Later creates never hand the id out again.
    for _ in 0..20 {
        assert_ne!(id_segment(&create(&app, &new_guitar()).await), id);
    }
}

#[tokio::test]
async fn custom_collection_path() {
    let (app, _system) = build_test_app(&[("CATALOG_COLLECTION_PATH", "/instruments")]);

    assert_eq!(get(&app, "/instruments").await.status(), StatusCode::OK);
    assert_eq!(get(&app, COLLECTION).await.status(), StatusCode::NOT_FOUND);
}
