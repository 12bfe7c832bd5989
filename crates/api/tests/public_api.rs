//! Integration tests for the root-level public pages.

mod common;

use axum::http::StatusCode;
use common::{anonymous_token, body_bytes, body_json, get, post_json, save_card};
use serde_json::json;

#[tokio::test]
async fn card_page_counts_a_view_and_renders() {
    let app = common::build_test_app();
    let token = anonymous_token(&app, Some("Jane")).await;
    let id = save_card(&app, &token, "Jane Doe", "coffee-badger").await;

    let response = get(app.clone(), &format!("/card/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["card"]["viewCount"], 1);
    assert_eq!(json["data"]["layout"]["analytics"]["views"], 1);
    assert_eq!(json["data"]["layout"]["analytics"]["sharedBy"], "Jane");

    let response = get(app, &format!("/card/{id}")).await;
    assert_eq!(body_json(response).await["data"]["card"]["viewCount"], 2);
}

#[tokio::test]
async fn card_page_for_missing_card_is_404() {
    let app = common::build_test_app();
    let response = get(app, &format!("/card/{}", uuid::Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_leaderboard_has_no_entries() {
    let app = common::build_test_app();
    let response = get(app, "/leaderboard").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["limit"], 5);
    assert!(json["data"]["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn leaderboard_ranks_by_views() {
    let app = common::build_test_app();
    let token = anonymous_token(&app, None).await;

    let mut ids = Vec::new();
    for (name, views) in [("Low", 1), ("High", 4), ("Mid", 2)] {
        let id = save_card(&app, &token, name, "coffee-badger").await;
        for _ in 0..views {
            post_json(app.clone(), &format!("/api/v1/cards/{id}/views"), json!({})).await;
        }
        ids.push(id);
    }

    let response = get(app.clone(), "/leaderboard?limit=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let entries = json["data"]["entries"].as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["card"]["name"], "High");
    assert_eq!(entries[0]["card"]["viewCount"], 4);
    assert_eq!(entries[1]["rank"], 2);
    assert_eq!(entries[1]["card"]["name"], "Mid");
}

#[tokio::test]
async fn leaderboard_limit_is_clamped() {
    let app = common::build_test_app();
    let response = get(app, "/leaderboard?limit=9999").await;

    assert_eq!(body_json(response).await["data"]["limit"], 50);
}

#[tokio::test]
async fn sitemap_lists_static_pages_and_cards() {
    let app = common::build_test_app();
    let token = anonymous_token(&app, None).await;
    let id = save_card(&app, &token, "Jane Doe", "coffee-badger").await;

    let response = get(app, "/sitemap.xml").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/xml; charset=utf-8"
    );
    let xml = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("<loc>https://theexecutivejokester.com</loc>"));
    assert!(xml.contains("<loc>https://theexecutivejokester.com/leaderboard</loc>"));
    assert!(xml.contains(&format!(
        "<loc>https://theexecutivejokester.com/card/{id}</loc>"
    )));
}
