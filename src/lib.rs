//! # bookmx
//!
//! Hotel reservation backend: a read-only catalog of cities and hotels, a
//! road graph for nearby-city lookups, and a reservation store behind a
//! small REST API.
//!
//! ## Layers
//!
//! - **domain**: cities, hotels, reservations, their rules and repository traits
//! - **application**: reservation creation and catalog use-cases
//! - **infrastructure**: SeaORM (SQLite) and in-memory repositories
//! - **interfaces**: axum HTTP API with Swagger UI
//! - **server**: startup, seeding and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryRepositoryProvider, SeaOrmRepositoryProvider,
};
pub use interfaces::http::create_api_router;
pub use server::{init_tracing, ServerHandle, ServerOptions};
