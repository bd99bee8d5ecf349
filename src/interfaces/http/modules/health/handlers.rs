use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct HealthState {
    /// `None` when running on the in-memory store
    pub db: Option<DatabaseConnection>,
    pub started_at: Arc<Instant>,
}

impl HealthState {
    pub fn new(db: Option<DatabaseConnection>) -> Self {
        Self {
            db,
            started_at: Arc::new(Instant::now()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` or `degraded`
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub storage: StorageHealth,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StorageHealth {
    /// `database` or `memory`
    pub backend: String,
    pub status: String,
    pub latency_ms: Option<u64>,
}

async fn ping_database(db: &DatabaseConnection) -> StorageHealth {
    let started = Instant::now();
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1".to_owned());
    match db.execute(ping).await {
        Ok(_) => StorageHealth {
            backend: "database".into(),
            status: "ok".into(),
            latency_ms: Some(started.elapsed().as_millis() as u64),
        },
        Err(e) => {
            tracing::error!("Database ping failed: {}", e);
            StorageHealth {
                backend: "database".into(),
                status: "error".into(),
                latency_ms: None,
            }
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Storage is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let storage = match &state.db {
        Some(db) => ping_database(db).await,
        None => StorageHealth {
            backend: "memory".into(),
            status: "ok".into(),
            latency_ms: None,
        },
    };

    let healthy = storage.status == "ok";
    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(HealthResponse {
            status: if healthy { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            storage,
        }),
    )
}
