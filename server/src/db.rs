use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use thiserror::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

#[derive(Error, Debug)]
pub enum DbSetupError {
    #[error("Failed to create database pool: {0}")]
    Pool(#[from] r2d2::PoolError),

    #[error("Failed to run database migrations: {0}")]
    Migrations(String),
}

/// Create the connection pool and bring the schema up to date.
///
/// Use a pool size of 1 for `:memory:` databases; every SQLite in-memory
/// connection is its own database.
pub fn create_pool(database_url: &str, pool_size: u32) -> Result<DbPool, DbSetupError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder().max_size(pool_size).build(manager)?;

    let mut conn = pool.get()?;
    run_migrations(&mut conn)?;

    Ok(pool)
}

pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), DbSetupError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbSetupError::Migrations(e.to_string()))?;
    if !applied.is_empty() {
        tracing::info!("Applied {} database migration(s)", applied.len());
    }
    Ok(())
}

/// Check out a pooled connection, or return `$on_error` from the enclosing handler.
///
/// Without a second argument the failure is a JSON 500.
#[macro_export]
macro_rules! get_conn {
    ($pool:expr) => {
        $crate::get_conn!(
            $pool,
            $crate::api::ErrorResponse::response(
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Database connection failed",
            )
        )
    };
    ($pool:expr, $on_error:expr) => {
        match $pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!("Failed to get DB connection: {}", e);
                return $on_error;
            }
        }
    };
}
