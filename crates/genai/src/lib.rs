//! Generative-model client for card content.
//!
//! Wraps the Generative Language REST API (`generateContent`) and exposes
//! the three card adapters behind the [`CardGenerator`] trait:
//! satirical wit, satirized portraits and product suggestions.

pub mod api;
pub mod data_uri;
pub mod error;
pub mod generator;
pub mod prompts;
pub mod wire;

pub use error::GenAiError;
pub use generator::{
    CardGenerator, DisabledGenerator, GeminiGenerator, ImageRequest, ImageResponse, ProductRequest,
    ProductSuggestion, ProductsResponse, WitRequest, WitResponse,
};
