//! Persistence for saved sharing cards.
//!
//! - [`models`] -- row structs and insert DTOs.
//! - [`repositories`] -- SQL against the `sharing_cards` table.
//! - [`store`] -- the [`CardStore`](store::CardStore) seam and its backends.
//! - [`gateway`] -- save, view, share, submit and review operations.
//! - [`leaderboard`] -- top cards by views.

pub mod gateway;
pub mod leaderboard;
pub mod models;
pub mod repositories;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
