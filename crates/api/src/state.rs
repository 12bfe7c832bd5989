use std::sync::Arc;

use jokester_db::gateway::PersistenceGateway;
use jokester_genai::CardGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Saved-card operations over the configured store.
    pub gateway: PersistenceGateway,
    /// Generative adapters (wit, portrait, products).
    pub generator: Arc<dyn CardGenerator>,
    pub config: Arc<ServerConfig>,
}
