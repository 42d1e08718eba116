/**
 * Server Configuration
 *
 * Loads the PostgreSQL connection pool from the environment and runs the
 * schema migrations. Configuration errors here are fatal: the whole API is
 * database-backed, so starting without one would only produce 500s.
 */
use sqlx::PgPool;
use thiserror::Error;

/// Errors raised while loading server configuration.
#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Connect the database pool and bring the schema up to date.
///
/// Reads `DATABASE_URL`, connects, and applies everything under
/// `migrations/`. Any failure is returned to the caller; the server entry
/// point treats it as fatal.
pub async fn load_database() -> Result<PgPool, ServerConfigError> {
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| ServerConfigError::MissingDatabaseUrl)?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    tracing::info!("Database ready");
    Ok(pool)
}
