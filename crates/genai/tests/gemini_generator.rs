//! Adapter behaviour against a mocked generative API.

use assert_matches::assert_matches;
use jokester_core::card::CardTheme;
use jokester_core::error::CoreError;
use jokester_genai::api::GeminiApi;
use jokester_genai::error::MODERATION_MESSAGE;
use jokester_genai::{
    CardGenerator, GeminiGenerator, GenAiError, ImageRequest, ProductRequest, WitRequest,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEXT_PATH: &str = "/v1beta/models/text-model:generateContent";
const IMAGE_PATH: &str = "/v1beta/models/image-model:generateContent";

fn generator(server: &MockServer) -> GeminiGenerator {
    let api = GeminiApi::new(server.uri(), "test-key", None).unwrap();
    GeminiGenerator::new(api, "text-model", "image-model")
}

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    }))
}

fn wit_request() -> WitRequest {
    WitRequest {
        name: "Jane Doe".into(),
        title: "Coffee Badger".into(),
        theme: CardTheme::Tactical,
        image_url: "https://picsum.photos/seed/user/400/400".into(),
        bio: None,
    }
}

fn image_request() -> ImageRequest {
    ImageRequest {
        image_url: "data:image/jpeg;base64,/9j/4AAQSkZJRg==".into(),
        persona_name: "Coffee Badger".into(),
        persona_description: "Fuelled entirely by espresso.".into(),
    }
}

#[tokio::test]
async fn generate_wit_returns_trimmed_line() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(text_response(
            r#"{"satiricalWit": "  I have the bandwidth, just not the will.  "}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let wit = generator(&server).generate_wit(&wit_request()).await.unwrap();
    assert_eq!(wit.satirical_wit, "I have the bandwidth, just not the will.");
}

#[tokio::test]
async fn generate_wit_with_blank_output_is_generation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(text_response(r#"{"satiricalWit": "   "}"#))
        .mount(&server)
        .await;

    let err = generator(&server).generate_wit(&wit_request()).await.unwrap_err();
    assert_matches!(err, GenAiError::InvalidOutput(_));
    assert_matches!(CoreError::from(err), CoreError::Generation(_));
}

#[tokio::test]
async fn generate_wit_with_malformed_json_is_generation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(text_response("not json at all"))
        .mount(&server)
        .await;

    let err = generator(&server).generate_wit(&wit_request()).await.unwrap_err();
    assert_matches!(err, GenAiError::InvalidOutput(_));
}

#[tokio::test]
async fn api_failure_is_reported_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let err = generator(&server).generate_wit(&wit_request()).await.unwrap_err();
    assert_matches!(err, GenAiError::Api { status: 503, ref body } if body == "overloaded");
}

#[tokio::test]
async fn satirize_image_returns_data_uri() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .and(body_partial_json(json!({
            "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "Behold." },
                    { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
                ]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let image = generator(&server)
        .satirize_image(&image_request())
        .await
        .unwrap();
    assert_eq!(image.satirized_image_url, "data:image/png;base64,iVBORw0KGgo=");
}

#[tokio::test]
async fn blocked_image_becomes_sardonic_moderation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let err = generator(&server)
        .satirize_image(&image_request())
        .await
        .unwrap_err();
    assert_matches!(err, GenAiError::Refused { ref reason } if reason == "SAFETY");
    assert_matches!(CoreError::from(err), CoreError::Moderation(msg) if msg == MODERATION_MESSAGE);
}

#[tokio::test]
async fn malformed_photo_never_reaches_the_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let mut request = image_request();
    request.image_url = "https://example.com/me.png".into();

    let err = generator(&server).satirize_image(&request).await.unwrap_err();
    assert_matches!(CoreError::from(err), CoreError::Validation(_));
}

#[tokio::test]
async fn suggest_products_truncates_to_two() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(text_response(
            r#"{"products": [
                {"productName": "A Mouse Jiggler to Enhance Productivity", "searchQuery": "mouse jiggler"},
                {"productName": "Noise Cancelling Headphones", "searchQuery": "anc headphones"},
                {"productName": "A Third Thing", "searchQuery": "third thing"}
            ]}"#,
        ))
        .mount(&server)
        .await;

    let products = generator(&server)
        .suggest_products(&ProductRequest {
            persona_name: "Mute Button Ninja".into(),
            persona_description: "Speaks only when unmuted by accident.".into(),
        })
        .await
        .unwrap();
    assert_eq!(products.products.len(), 2);
    assert_eq!(products.products[0].search_query, "mouse jiggler");
}

#[tokio::test]
async fn suggest_products_with_no_products_is_generation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(text_response(r#"{"products": []}"#))
        .mount(&server)
        .await;

    let err = generator(&server)
        .suggest_products(&ProductRequest {
            persona_name: "Mute Button Ninja".into(),
            persona_description: "Speaks only when unmuted by accident.".into(),
        })
        .await
        .unwrap_err();
    assert_matches!(err, GenAiError::InvalidOutput(_));
}
