//! Shared helpers for API integration tests.
//!
//! The app runs against the in-memory card store and a scripted generator,
//! so these tests need neither a database nor network access.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use jokester_api::auth::jwt::JwtConfig;
use jokester_api::config::{GenAiConfig, ServerConfig, StoreBackend};
use jokester_api::router::build_app_router;
use jokester_api::state::AppState;
use jokester_db::gateway::PersistenceGateway;
use jokester_db::store::MemoryCardStore;
use jokester_genai::{
    CardGenerator, GenAiError, ImageRequest, ImageResponse, ProductRequest, ProductSuggestion,
    ProductsResponse, WitRequest, WitResponse,
};
use tower::ServiceExt;

pub const REVIEWER_KEY: &str = "let-me-review";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:9002".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        public_base_url: "https://theexecutivejokester.com".to_string(),
        store: StoreBackend::Memory,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
        reviewer_access_key: Some(REVIEWER_KEY.to_string()),
        genai: GenAiConfig::default(),
    }
}

/// Scripted generator. Text calls fail when `fail_text` is set; image calls
/// are refused when `refuse_images` is set.
#[derive(Debug, Default, Clone)]
pub struct StubGenerator {
    pub fail_text: bool,
    pub refuse_images: bool,
}

#[async_trait]
impl CardGenerator for StubGenerator {
    async fn generate_wit(&self, input: &WitRequest) -> Result<WitResponse, GenAiError> {
        if self.fail_text {
            return Err(GenAiError::InvalidOutput("empty satirical wit".into()));
        }
        Ok(WitResponse {
            satirical_wit: format!("{} has the bandwidth, just not the will.", input.name),
        })
    }

    async fn satirize_image(&self, input: &ImageRequest) -> Result<ImageResponse, GenAiError> {
        let _photo: jokester_genai::data_uri::DataUri = input.image_url.parse()?;
        if self.refuse_images {
            return Err(GenAiError::Refused {
                reason: "SAFETY".into(),
            });
        }
        Ok(ImageResponse {
            satirized_image_url: "data:image/png;base64,iVBORw0KGgo=".into(),
        })
    }

    async fn suggest_products(
        &self,
        _input: &ProductRequest,
    ) -> Result<ProductsResponse, GenAiError> {
        if self.fail_text {
            return Err(GenAiError::InvalidOutput("no product suggestions".into()));
        }
        Ok(ProductsResponse {
            products: vec![ProductSuggestion {
                product_name: "A Mouse Jiggler to Enhance Productivity".into(),
                search_query: "mouse jiggler".into(),
            }],
        })
    }
}

/// Build the full application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(StubGenerator::default())
}

pub fn build_test_app_with(generator: StubGenerator) -> Router {
    let config = test_config();
    let state = AppState {
        gateway: PersistenceGateway::new(Arc::new(MemoryCardStore::new())),
        generator: Arc::new(generator),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Start an anonymous session and return its token.
pub async fn anonymous_token(app: &Router, display_name: Option<&str>) -> String {
    let body = match display_name {
        Some(name) => serde_json::json!({ "displayName": name }),
        None => serde_json::json!({}),
    };
    let response = post_json(app.clone(), "/api/v1/auth/anonymous", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn reviewer_token(app: &Router) -> String {
    let response = post_json(
        app.clone(),
        "/api/v1/auth/reviewer",
        serde_json::json!({ "accessKey": REVIEWER_KEY }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// A valid card body for `persona_id`.
pub fn card_json(name: &str, persona_id: &str) -> serde_json::Value {
    let persona = jokester_core::persona::find(persona_id).unwrap();
    serde_json::json!({
        "name": name,
        "persona": persona,
        "imageUrl": "https://picsum.photos/seed/user/400/400",
        "theme": "Tactical",
        "satiricalWit": "Per my last email, I'm out of coffee.",
        "bio": "",
        "isEvolved": false,
        "customQuote": ""
    })
}

/// Save a card and return its id.
pub async fn save_card(app: &Router, token: &str, name: &str, persona_id: &str) -> String {
    let response = post_json_auth(
        app.clone(),
        "/api/v1/cards",
        token,
        card_json(name, persona_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["docId"]
        .as_str()
        .unwrap()
        .to_string()
}
