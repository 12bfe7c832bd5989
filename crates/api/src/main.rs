use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jokester_api::config::{ServerConfig, StoreBackend};
use jokester_api::router::build_app_router;
use jokester_api::state::AppState;
use jokester_db::gateway::PersistenceGateway;
use jokester_db::store::{CardStore, MemoryCardStore, PgCardStore};
use jokester_genai::api::GeminiApi;
use jokester_genai::{CardGenerator, DisabledGenerator, GeminiGenerator};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jokester_api=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Card store ---
    let store: Arc<dyn CardStore> = match &config.store {
        StoreBackend::Postgres { database_url } => {
            let pool = jokester_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            jokester_db::health_check(&pool)
                .await
                .expect("Database health check failed");

            jokester_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgCardStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory card store; saved cards are lost on restart");
            Arc::new(MemoryCardStore::new())
        }
    };

    // --- Generative adapters ---
    let genai = &config.genai;
    let generator: Arc<dyn CardGenerator> = match &genai.api_key {
        Some(api_key) => {
            let api = GeminiApi::new(
                &genai.api_url,
                api_key,
                genai.timeout_secs.map(Duration::from_secs),
            )
            .expect("Failed to build generative API client");
            tracing::info!(
                text_model = %genai.text_model,
                image_model = %genai.image_model,
                "Generative adapters enabled",
            );
            Arc::new(GeminiGenerator::new(
                api,
                &genai.text_model,
                &genai.image_model,
            ))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY not set; generative endpoints are disabled");
            Arc::new(DisabledGenerator)
        }
    };

    // --- App state ---
    let state = AppState {
        gateway: PersistenceGateway::new(store),
        generator,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .into_future();

    // Bound the drain once a signal has arrived.
    let drain_limit = Duration::from_secs(config.shutdown_timeout_secs);
    let drain_deadline = async move {
        let _ = shutdown_rx.wait_for(|stopping| *stopping).await;
        tokio::time::sleep(drain_limit).await;
    };

    tokio::select! {
        result = server => {
            result.expect("Server error");
            tracing::info!("Graceful shutdown complete");
        }
        () = drain_deadline => {
            tracing::warn!(
                timeout_secs = drain_limit.as_secs(),
                "In-flight requests did not drain in time, exiting",
            );
        }
    }
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
