use crate::auth::jwt::JwtConfig;

/// Which [`CardStore`](jokester_db::store::CardStore) backend to run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL at `database_url`.
    Postgres { database_url: String },
    /// Process-local store. Cards vanish on restart.
    Memory,
}

/// Generative model settings.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// API key. Generative endpoints fail when unset.
    pub api_key: Option<String>,
    pub api_url: String,
    pub text_model: String,
    pub image_model: String,
    /// Per-request client timeout in seconds. `None` leaves only the
    /// server's request timeout in effect.
    pub timeout_secs: Option<u64>,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: jokester_genai::api::DEFAULT_API_URL.to_string(),
            text_model: jokester_genai::generator::DEFAULT_TEXT_MODEL.to_string(),
            image_model: jokester_genai::generator::DEFAULT_IMAGE_MODEL.to_string(),
            timeout_secs: None,
        }
    }
}

impl GenAiConfig {
    /// | Env Var              | Default                                     |
    /// |----------------------|---------------------------------------------|
    /// | `GEMINI_API_KEY`     | unset                                       |
    /// | `GEMINI_API_URL`     | `https://generativelanguage.googleapis.com` |
    /// | `GEMINI_TEXT_MODEL`  | `gemini-2.5-flash`                          |
    /// | `GEMINI_IMAGE_MODEL` | `gemini-2.5-flash-image-preview`            |
    /// | `GENAI_TIMEOUT_SECS` | unset                                       |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout_secs = std::env::var("GENAI_TIMEOUT_SECS").ok().map(|v| {
            v.parse::<u64>()
                .expect("GENAI_TIMEOUT_SECS must be a valid u64")
        });

        Self {
            api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            api_url: std::env::var("GEMINI_API_URL").unwrap_or(defaults.api_url),
            text_model: std::env::var("GEMINI_TEXT_MODEL").unwrap_or(defaults.text_model),
            image_model: std::env::var("GEMINI_IMAGE_MODEL").unwrap_or(defaults.image_model),
            timeout_secs,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except `JWT_SECRET` have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`).
    pub request_timeout_secs: u64,
    /// Seconds to wait for in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Absolute site URL used for sitemap entries, without a trailing slash.
    pub public_base_url: String,
    pub store: StoreBackend,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Shared secret exchanged for a reviewer token. Reviewer login is
    /// disabled when unset.
    pub reviewer_access_key: Option<String>,
    pub genai: GenAiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                             |
    /// |-------------------------|-------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                           |
    /// | `PORT`                  | `3000`                              |
    /// | `CORS_ORIGINS`          | `http://localhost:9002`             |
    /// | `REQUEST_TIMEOUT_SECS`  | `60`                                |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                                |
    /// | `PUBLIC_BASE_URL`       | `https://theexecutivejokester.com`  |
    /// | `CARD_STORE`            | `postgres`                          |
    /// | `DATABASE_URL`          | required when `CARD_STORE=postgres` |
    /// | `REVIEWER_ACCESS_KEY`   | unset                               |
    ///
    /// # Panics
    ///
    /// Panics on malformed values, so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:9002".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "https://theexecutivejokester.com".into())
            .trim_end_matches('/')
            .to_string();

        let store = match std::env::var("CARD_STORE")
            .unwrap_or_else(|_| "postgres".into())
            .as_str()
        {
            "postgres" => StoreBackend::Postgres {
                database_url: std::env::var("DATABASE_URL")
                    .expect("DATABASE_URL must be set when CARD_STORE=postgres"),
            },
            "memory" => StoreBackend::Memory,
            other => panic!("CARD_STORE must be 'postgres' or 'memory', got '{other}'"),
        };

        let reviewer_access_key = std::env::var("REVIEWER_ACCESS_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            public_base_url,
            store,
            jwt: JwtConfig::from_env(),
            reviewer_access_key,
            genai: GenAiConfig::from_env(),
        }
    }
}
