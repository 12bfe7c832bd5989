//! The card adapters: satirical wit, satirized portraits and product
//! suggestions.
//!
//! Each call makes exactly one request to the model. Nothing is cached or
//! retried.

use async_trait::async_trait;
use jokester_core::card::CardTheme;
use serde::{Deserialize, Serialize};

use crate::api::GeminiApi;
use crate::data_uri::DataUri;
use crate::error::GenAiError;
use crate::prompts;
use crate::wire::{GenerateContentRequest, GenerationConfig, Part, BLOCK_MEDIUM_AND_ABOVE};

/// Default model for text adapters.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Default model for the image adapter.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Products returned per suggestion request at most.
pub const MAX_PRODUCTS: usize = 2;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WitRequest {
    pub name: String,
    pub title: String,
    pub theme: CardTheme,
    pub image_url: String,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WitResponse {
    pub satirical_wit: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    /// Photo as a `data:` URI.
    pub image_url: String,
    pub persona_name: String,
    pub persona_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub satirized_image_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub persona_name: String,
    pub persona_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSuggestion {
    pub product_name: String,
    pub search_query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductSuggestion>,
}

/// Generates card content from a model.
#[async_trait]
pub trait CardGenerator: Send + Sync {
    async fn generate_wit(&self, input: &WitRequest) -> Result<WitResponse, GenAiError>;

    async fn satirize_image(&self, input: &ImageRequest) -> Result<ImageResponse, GenAiError>;

    async fn suggest_products(&self, input: &ProductRequest)
        -> Result<ProductsResponse, GenAiError>;
}

/// [`CardGenerator`] backed by the Gemini `generateContent` API.
#[derive(Clone)]
pub struct GeminiGenerator {
    api: GeminiApi,
    text_model: String,
    image_model: String,
}

impl GeminiGenerator {
    pub fn new(api: GeminiApi, text_model: impl Into<String>, image_model: impl Into<String>) -> Self {
        Self {
            api,
            text_model: text_model.into(),
            image_model: image_model.into(),
        }
    }

    /// Run a text prompt that must answer with a JSON document.
    async fn generate_json<T: serde::de::DeserializeOwned>(&self, prompt: String) -> Result<T, GenAiError> {
        let request = GenerateContentRequest::user(vec![Part::text(prompt)])
            .with_generation_config(GenerationConfig::json());
        let response = self.api.generate_content(&self.text_model, &request).await?;

        let text = response.text().ok_or_else(|| match response.refusal_reason() {
            Some(reason) => GenAiError::InvalidOutput(format!("no text returned ({reason})")),
            None => GenAiError::InvalidOutput("no text returned".into()),
        })?;

        serde_json::from_str(strip_code_fence(&text))
            .map_err(|e| GenAiError::InvalidOutput(format!("malformed JSON: {e}")))
    }
}

#[async_trait]
impl CardGenerator for GeminiGenerator {
    async fn generate_wit(&self, input: &WitRequest) -> Result<WitResponse, GenAiError> {
        let output: WitResponse = self.generate_json(prompts::wit_prompt(input)).await?;

        let satirical_wit = output.satirical_wit.trim().to_string();
        if satirical_wit.is_empty() {
            return Err(GenAiError::InvalidOutput("empty satirical wit".into()));
        }
        tracing::info!(name = %input.name, theme = %input.theme, "Satirical wit generated");
        Ok(WitResponse { satirical_wit })
    }

    async fn satirize_image(&self, input: &ImageRequest) -> Result<ImageResponse, GenAiError> {
        let photo: DataUri = input.image_url.parse()?;
        if !photo.is_image() {
            return Err(GenAiError::InvalidInput("The uploaded file is not an image".into()));
        }

        let request = GenerateContentRequest::user(vec![
            Part::inline(photo.mime_type, photo.data),
            Part::text(prompts::image_prompt(input)),
        ])
        .with_generation_config(GenerationConfig::text_and_image())
        .with_safety_threshold(BLOCK_MEDIUM_AND_ABOVE);

        let response = self.api.generate_content(&self.image_model, &request).await?;

        match response.inline_data() {
            Some(image) => {
                tracing::info!(persona = %input.persona_name, "Satirized image generated");
                let uri = DataUri::new(image.mime_type.clone(), image.data.clone());
                Ok(ImageResponse {
                    satirized_image_url: uri.to_string(),
                })
            }
            None => {
                let reason = response.refusal_reason().unwrap_or("NO_IMAGE").to_string();
                tracing::warn!(persona = %input.persona_name, %reason, "Image model returned no image");
                Err(GenAiError::Refused { reason })
            }
        }
    }

    async fn suggest_products(
        &self,
        input: &ProductRequest,
    ) -> Result<ProductsResponse, GenAiError> {
        let mut output: ProductsResponse = self.generate_json(prompts::products_prompt(input)).await?;

        output
            .products
            .retain(|p| !p.product_name.trim().is_empty() && !p.search_query.trim().is_empty());
        if output.products.is_empty() {
            return Err(GenAiError::InvalidOutput("no product suggestions".into()));
        }
        output.products.truncate(MAX_PRODUCTS);
        Ok(output)
    }
}

/// [`CardGenerator`] used when no API key is configured. Every call fails
/// with [`GenAiError::NotConfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

#[async_trait]
impl CardGenerator for DisabledGenerator {
    async fn generate_wit(&self, _input: &WitRequest) -> Result<WitResponse, GenAiError> {
        Err(GenAiError::NotConfigured)
    }

    async fn satirize_image(&self, _input: &ImageRequest) -> Result<ImageResponse, GenAiError> {
        Err(GenAiError::NotConfigured)
    }

    async fn suggest_products(
        &self,
        _input: &ProductRequest,
    ) -> Result<ProductsResponse, GenAiError> {
        Err(GenAiError::NotConfigured)
    }
}

/// Models sometimes wrap JSON in a Markdown fence despite the MIME type.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_code_fence_handles_fenced_and_bare_json() {
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```\n"), "{\"a\":1}");
    }

    #[test]
    fn wit_request_reads_camel_case() {
        let req: WitRequest = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "title": "Coffee Badger",
            "theme": "Tactical",
            "imageUrl": "https://picsum.photos/seed/user/400/400"
        }))
        .unwrap();
        assert_eq!(req.theme, CardTheme::Tactical);
        assert_eq!(req.bio, None);
    }
}
