//! # Boxing Studio Account API
//!
//! Registration and login for the boxing studio web app.
//!
//! ## Architecture
//!
//! - **domain**: the user record, field validation rules, repository trait
//! - **application**: the account service (login, register)
//! - **infrastructure**: SQLite (SeaORM) and in-memory user stores, password hashing
//! - **interfaces**: HTTP API (`POST /api/login`, `POST /api/register`)
//! - **shared**: error types, graceful shutdown
//! - **server**: startup and shutdown of the whole service

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
