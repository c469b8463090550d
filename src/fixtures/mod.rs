// fixtures/mod.rs - Database table fixtures
//
// Each table the app needs is described once, as DDL, and reused by the
// server at startup and by the integration tests. Statements are written
// with `IF NOT EXISTS` so applying them twice is harmless.

pub mod tables;

/// A table (or group of tables) the application owns
pub trait TestTable {
    /// SQL statements that create the table inside `schema`, in order
    fn setup_sql(schema: &str) -> Vec<String>;
}
