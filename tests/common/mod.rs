// common/mod.rs - Shared test utilities for database setup and teardown
//
// Every test gets its own schema. The pool handed to the test sets
// `search_path` on each new connection, so the unqualified table names in
// the queries resolve to that schema.

#![allow(dead_code)]

use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use std::env;
use std::time::Duration;

use standard_answers::fixtures::tables::StandardAnswersTable;
use standard_answers::fixtures::TestTable;

fn database_url() -> anyhow::Result<String> {
    dotenv::dotenv().ok();
    env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set in environment"))
}

/// Create a database connection pool for testing
pub async fn create_test_pool() -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(60))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&database_url()?)
        .await?;

    Ok(pool)
}

/// Pool whose connections all resolve unqualified names in `schema`
pub async fn create_schema_pool(schema: &str) -> anyhow::Result<PgPool> {
    let set_path = format!("SET search_path TO {}", schema);

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .after_connect(move |conn, _meta| {
            let set_path = set_path.clone();
            Box::pin(async move {
                conn.execute(set_path.as_str()).await?;
                Ok(())
            })
        })
        .connect(&database_url()?)
        .await?;

    Ok(pool)
}

/// Drop the schema and everything in it
pub async fn teardown_test_db(pool: &PgPool, schema: &str) -> anyhow::Result<()> {
    let query = format!("DROP SCHEMA IF EXISTS {} CASCADE", schema);
    sqlx::query(&query).execute(pool).await?;
    Ok(())
}

/// Recreate `schema` from scratch with the standard answer tables
pub async fn setup_test_db(pool: &PgPool, schema: &str) -> anyhow::Result<()> {
    teardown_test_db(pool, schema).await?;

    for statement in StandardAnswersTable::setup_sql(schema) {
        sqlx::query(&statement).execute(pool).await?;
    }

    Ok(())
}

/// Generate a unique schema name for a test
pub fn generate_test_schema_name(test_name: &str) -> String {
    // Sanitize test name to be a valid schema name (alphanumeric + underscore)
    let sanitized = test_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c.to_ascii_lowercase() } else { '_' })
        .collect::<String>();

    // PostgreSQL identifiers stop at 63 bytes
    let truncated = if sanitized.len() > 50 {
        &sanitized[..50]
    } else {
        &sanitized
    };

    format!("test_{}", truncated)
}

/// Full setup and teardown wrapper for tests with isolated schema
///
/// The test function receives a pool already scoped to the fresh schema.
pub async fn with_test_db<F, Fut>(test_name: &str, test_fn: F) -> anyhow::Result<()>
where
    F: FnOnce(PgPool) -> Fut,
    Fut: std::future::Future<Output = anyhow::Result<()>>,
{
    let admin = create_test_pool().await?;
    let schema_name = generate_test_schema_name(test_name);

    setup_test_db(&admin, &schema_name).await?;
    let pool = create_schema_pool(&schema_name).await?;

    let result = test_fn(pool.clone()).await;

    // Always cleanup, even if test fails
    pool.close().await;
    teardown_test_db(&admin, &schema_name).await?;

    result
}
