pub mod entities;
pub mod migrator;
pub mod repositories;

pub use repositories::UserRepository;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./boxing_studio.db?mode=rwc")
    pub url: String,
}

impl DatabaseConfig {
    /// Create config for a private in-memory SQLite database
    pub fn sqlite_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
        }
    }

    fn is_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    let mut options = ConnectOptions::new(config.url.clone());
    options.sqlx_logging(false);
    // Every pooled connection to an in-memory SQLite URL would get its own database.
    if config.is_memory() {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}
