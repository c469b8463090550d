// web_app/api/mod.rs - Server-side storage and configuration
//
// Everything in here talks to Postgres and is only built with the
// database tooling enabled.

pub mod config;
pub mod db;
pub mod queries;
