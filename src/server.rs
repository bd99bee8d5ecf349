//! Server runtime
//!
//! [`ServerHandle`] owns the whole lifecycle: storage backend, migrations,
//! catalog seeding, metrics recorder, the REST API and graceful shutdown.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::application::CatalogService;
use crate::config::{AppConfig, StorageBackend};
use crate::domain::{DomainError, RepositoryProvider};
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, InMemoryRepositoryProvider, SeaOrmRepositoryProvider};
use crate::interfaces::http::create_api_router;
use crate::shared::shutdown::ShutdownCoordinator;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Catalog seeding failed: {0}")]
    Seed(#[from] DomainError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

pub struct ServerOptions {
    pub config: AppConfig,
    /// Run pending migrations before serving (database backend only)
    pub auto_migrate: bool,
    /// Insert the `[catalog]` cities, roads and hotels when the store is empty
    pub seed_catalog: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
            seed_catalog: true,
        }
    }
}

impl ServerOptions {
    pub fn new(config: AppConfig) -> Self {
        let seed_catalog = config.catalog.seed_on_startup;
        Self {
            config,
            seed_catalog,
            ..Self::default()
        }
    }
}

/// A running reservation service.
///
/// ```rust,no_run
/// use bookmx::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    pub repos: Arc<dyn RepositoryProvider>,
    pub config: AppConfig,
    /// Address actually bound, useful when `api_port` is 0
    pub local_addr: SocketAddr,

    db: Option<DatabaseConnection>,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

/// The global recorder can be installed once per process; later starts
/// reuse the same handle.
fn prometheus_handle() -> Option<PrometheusHandle> {
    static HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();
    HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                info!("Prometheus metrics recorder installed");
                Some(handle)
            }
            Err(e) => {
                warn!("Metrics disabled, recorder not installed: {}", e);
                None
            }
        })
        .clone()
}

impl ServerHandle {
    pub async fn start(opts: ServerOptions) -> Result<Self, ServerError> {
        let config = opts.config;
        info!("Starting bookmx reservation service...");

        let (repos, db): (Arc<dyn RepositoryProvider>, Option<DatabaseConnection>) =
            match config.storage.backend {
                StorageBackend::Database => {
                    let db = init_database(&config.database.to_database_config()).await?;
                    if opts.auto_migrate {
                        info!("Running database migrations...");
                        Migrator::up(&db, None).await?;
                        info!("Migrations completed");
                    }
                    (Arc::new(SeaOrmRepositoryProvider::new(db.clone())), Some(db))
                }
                StorageBackend::Memory => {
                    warn!("Using in-memory storage; data is lost on shutdown");
                    (Arc::new(InMemoryRepositoryProvider::new()), None)
                }
            };

        if opts.seed_catalog {
            let seed = config.catalog.to_seed()?;
            let added = CatalogService::new(repos.clone()).seed(seed).await?;
            info!(
                "Catalog seeding added {} city(ies), {} road(s), {} hotel(s)",
                added.cities, added.roads, added.hotels
            );
        }

        let router = create_api_router(repos.clone(), db.clone(), prometheus_handle());

        let addr = config.api_address();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr().map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
        info!("REST API listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let shutdown = ShutdownCoordinator::new(config.server.shutdown_timeout);
        let api_shutdown = shutdown.signal();
        let api_task = tokio::spawn(async move {
            let served = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    api_shutdown.wait().await;
                    info!("REST API received shutdown signal");
                })
                .await;
            if let Err(e) = served {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            repos,
            config,
            local_addr,
            db,
            shutdown,
            api_task,
        })
    }

    /// Trigger shutdown on SIGTERM / SIGINT.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }

    /// Block until shutdown is triggered and the API has drained, bounded by
    /// `server.shutdown_timeout`, then close the database.
    pub async fn wait(self) {
        let Self {
            db,
            shutdown,
            api_task,
            ..
        } = self;

        shutdown.signal().wait().await;
        let drained = shutdown
            .drain(async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!("REST API task panicked: {}", e),
                }
            })
            .await;
        if !drained {
            warn!("Abandoning in-flight requests");
        }

        if let Some(db) = db {
            match db.close().await {
                Ok(()) => info!("Database connection closed"),
                Err(e) => warn!("Error closing database connection: {}", e),
            }
        }
        info!("bookmx shutdown complete");
    }

    pub async fn shutdown(self) {
        self.trigger_shutdown();
        self.wait().await;
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `logging.level`. Call once, before
/// [`ServerHandle::start`].
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.logging.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };
    if installed.is_err() {
        warn!("Tracing subscriber already installed");
    }
}
