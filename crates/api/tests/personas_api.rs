//! Integration tests for the persona catalog.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn list_returns_full_catalog() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/personas").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let personas = json["data"].as_array().unwrap();
    assert_eq!(personas.len(), jokester_core::persona::catalog().len());
    assert!(personas.iter().all(|p| p["id"].is_string() && p["name"].is_string()));
}

#[tokio::test]
async fn get_persona_by_id() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/personas/coffee-badger").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], "coffee-badger");
    assert_eq!(json["data"]["name"], "Coffee Badger");
    assert_eq!(json["data"]["counterPersonaId"], "meeting-maximalist");
}

#[tokio::test]
async fn unknown_persona_is_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/personas/chief-vibes-officer").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Persona with id chief-vibes-officer not found");
}

#[tokio::test]
async fn counter_persona_follows_reference() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/personas/inbox-zero-monk/counter").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], "reply-all-warlord");
}

#[tokio::test]
async fn persona_without_counter_returns_null() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/personas/slide-deck-bard/counter").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"].is_null());
}
