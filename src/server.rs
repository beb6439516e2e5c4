//! Server runtime.
//!
//! [`ServerHandle`] owns the full lifecycle: store init and migrations,
//! the HTTP API, and graceful shutdown.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::application::{AccountService, SharedAccountService};
use crate::config::{AppConfig, StorageBackend};
use crate::domain::UserRepositoryInterface;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, DatabaseConfig, InMemoryUserRepository, UserRepository};
use crate::interfaces::http::create_api_router;
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the server.
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running account API.
///
/// # Examples
///
/// ```rust,no_run
/// use boxing_studio::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.shutdown().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the API is bound to.
    pub local_addr: std::net::SocketAddr,
    /// Account service backing the endpoints.
    pub account_service: SharedAccountService,

    db: Option<DatabaseConnection>,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Open the store, run migrations (if enabled) and start serving.
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        info!("Starting boxing studio account API...");

        // ── Store ──────────────────────────────────────────────
        let (repo, db) = open_store(&app_cfg, opts.auto_migrate).await?;
        let account_service: SharedAccountService = Arc::new(AccountService::new(
            repo,
            app_cfg.security.bcrypt_cost,
        ));

        // ── Shutdown coordinator ───────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        // ── REST API server ────────────────────────────────────
        let api_router = create_api_router(account_service.clone(), &app_cfg.cors);

        let api_addr = app_cfg.listen_address();
        let listener = tokio::net::TcpListener::bind(&api_addr).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);

        let api_shutdown = shutdown_signal.clone();
        let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            config: app_cfg,
            local_addr,
            account_service,
            db,
            shutdown,
            api_task,
        })
    }

    /// Get a cloneable shutdown signal.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to fully stop after shutdown has been triggered.
    pub async fn wait(self) {
        let Self {
            db,
            shutdown,
            api_task,
            ..
        } = self;

        let drained = shutdown
            .drain(async move {
                if let Err(e) = api_task.await {
                    error!("REST API server task panicked: {}", e);
                }
            })
            .await;
        if drained {
            info!("REST API server stopped");
        }

        if let Some(db) = db {
            if let Err(e) = db.close().await {
                warn!("Error closing database connection: {}", e);
            } else {
                info!("Database connection closed");
            }
        }

        info!("Shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("Shutting down account API...");
        self.trigger_shutdown();
        self.wait().await;
    }

    /// Check if the server is still running.
    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

type OpenedStore = (Arc<dyn UserRepositoryInterface>, Option<DatabaseConnection>);

/// Build the user store selected by `database.backend`.
async fn open_store(
    app_cfg: &AppConfig,
    auto_migrate: bool,
) -> Result<OpenedStore, Box<dyn std::error::Error>> {
    match app_cfg.database.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory user store; registrations are lost on restart");
            Ok((Arc::new(InMemoryUserRepository::new()), None))
        }
        StorageBackend::Sqlite => {
            let db_config = DatabaseConfig {
                url: app_cfg.database.connection_url(),
            };
            let db = init_database(&db_config).await?;

            if auto_migrate {
                info!("Running database migrations...");
                Migrator::up(&db, None).await?;
                info!("Migrations completed");
            }

            Ok((Arc::new(UserRepository::new(db.clone())), Some(db)))
        }
    }
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseSettings, SecurityConfig, ServerConfig};
    use crate::domain::{LoginDto, RegisterUserDto};
    use crate::infrastructure::crypto::password::MIN_COST;

    fn test_config(backend: StorageBackend) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
                shutdown_timeout: 5,
            },
            database: DatabaseSettings {
                backend,
                url: Some("sqlite::memory:".into()),
                ..DatabaseSettings::default()
            },
            security: SecurityConfig {
                bcrypt_cost: MIN_COST,
            },
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn starts_and_stops_with_memory_store() {
        let handle = ServerHandle::start(ServerOptions {
            config: test_config(StorageBackend::Memory),
            auto_migrate: true,
        })
        .await
        .unwrap();

        assert!(handle.is_running());
        assert_ne!(handle.local_addr.port(), 0);
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn sqlite_store_is_migrated_on_start() {
        let mut config = test_config(StorageBackend::Sqlite);
        if std::env::var("DATABASE_URL").is_ok() {
            // connection_url() prefers the environment; keep this test hermetic.
            config.database.backend = StorageBackend::Memory;
        }

        let handle = ServerHandle::start(ServerOptions {
            config,
            auto_migrate: true,
        })
        .await
        .unwrap();

        let svc = handle.account_service.clone();
        svc.register(RegisterUserDto {
            first_name: Some("Jane".into()),
            last_name: Some("Doe".into()),
            username: Some("jdoe".into()),
            password: Some("pw1".into()),
            email: Some("jane@doe.com".into()),
            phone: Some("5551234567".into()),
        })
        .await
        .unwrap();

        let user = svc
            .login(LoginDto {
                username: Some("jdoe".into()),
                password: Some("pw1".into()),
            })
            .await
            .unwrap();
        assert_eq!(user.email, "jane@doe.com");

        handle.shutdown().await;
    }
}
