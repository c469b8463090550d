// web_app/api/db.rs - Database connection pool setup
//
// This module provides pool creation, the process-wide pool used by server
// functions, and schema/seed bootstrapping.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::path::Path;
use std::sync::Mutex;
use std::sync::OnceLock;

use super::config::ServerConfig;
use super::queries;
use crate::fixtures::tables::StandardAnswersTable;
use crate::fixtures::TestTable;
use crate::web_app::model::StandardAnswerSeed;

static POOL: OnceLock<PgPool> = OnceLock::new();
static TEST_POOL_OVERRIDE: Mutex<Option<PgPool>> = Mutex::new(None);

/// Initialize the global database pool
pub fn init_db(pool: PgPool) {
    tracing::info!("Initializing global database pool");
    if POOL.set(pool).is_err() {
        tracing::warn!("Database pool already initialized");
    } else {
        tracing::info!("Global database pool initialized successfully");
    }
}

/// Set a pool override for testing
pub fn set_test_pool(pool: PgPool) {
    let mut guard = TEST_POOL_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(pool);
}

/// Get the global database pool
pub fn get_db() -> Option<PgPool> {
    {
        let guard = TEST_POOL_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref pool) = *guard {
            return Some(pool.clone());
        }
    }

    let pool = POOL.get().cloned();
    if pool.is_none() {
        tracing::warn!("Global pool is empty!");
    }
    pool
}

/// Create a PostgreSQL connection pool from the server configuration
pub async fn create_pool(config: &ServerConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

/// Create the standard answer tables in `schema` if they are missing.
pub async fn apply_schema(pool: &PgPool, schema: &str) -> Result<(), sqlx::Error> {
    for statement in StandardAnswersTable::setup_sql(schema) {
        sqlx::query(&statement).execute(pool).await?;
    }
    tracing::debug!("Schema {} is up to date", schema);
    Ok(())
}

/// Populate an empty answers table from a JSON seed file.
///
/// Returns the number of answers inserted (0 when the table already had rows).
pub async fn seed_if_empty(pool: &PgPool, seed_path: &Path) -> anyhow::Result<usize> {
    let existing = queries::count_standard_answers(pool).await?;
    if existing > 0 {
        tracing::info!("Database already contains {} standard answers, skipping seed.", existing);
        return Ok(0);
    }

    if !seed_path.exists() {
        tracing::warn!("Seed file {} not found, starting empty", seed_path.display());
        return Ok(0);
    }

    tracing::info!("Seeding standard answers from {}...", seed_path.display());
    let raw = std::fs::read_to_string(seed_path)?;
    let seeds: Vec<StandardAnswerSeed> = serde_json::from_str(&raw)?;
    let inserted = queries::seed_standard_answers(pool, &seeds).await?;
    tracing::info!("Seeded {} standard answers.", inserted);
    Ok(inserted)
}
