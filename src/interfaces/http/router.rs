//! API router with Swagger UI

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{CatalogService, ReservationService};
use crate::domain::RepositoryProvider;

use super::common::ErrorResponse;
use super::modules::{cities, health, hotels, metrics, request_id, reservations};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        cities::list_cities,
        cities::city_graph,
        cities::get_city,
        cities::nearby_cities,
        hotels::list_hotels,
        hotels::get_hotel,
        reservations::create_reservation,
        reservations::list_reservations,
        reservations::get_reservation,
    ),
    components(
        schemas(
            ErrorResponse,
            health::HealthResponse,
            health::StorageHealth,
            cities::CityDto,
            cities::RoadDto,
            cities::CityGraphDto,
            hotels::HotelDto,
            reservations::CreateReservationRequest,
            reservations::ReservationDto,
            reservations::HotelRefDto,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and storage status"),
        (name = "Cities", description = "Cities and the road graph between them"),
        (name = "Hotels", description = "Hotel catalog (read only)"),
        (name = "Reservations", description = "Create and look up reservations"),
    ),
    info(
        title = "bookmx reservation API",
        version = "1.0.0",
        description = "Hotel catalog and reservation booking"
    )
)]
pub struct ApiDoc;

/// Build the HTTP API.
///
/// `db` is only used by `/health`; pass `None` for the in-memory store.
/// `/metrics` is mounted only when a Prometheus handle is given.
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: Option<DatabaseConnection>,
    prometheus: Option<PrometheusHandle>,
) -> Router {
    let catalog_state = hotels::CatalogState {
        catalog: Arc::new(CatalogService::new(repos.clone())),
    };
    let reservation_state = reservations::ReservationAppState {
        service: Arc::new(ReservationService::new(repos)),
    };

    let city_routes = Router::new()
        .route("/", get(cities::list_cities))
        .route("/graph", get(cities::city_graph))
        .route("/{id}", get(cities::get_city))
        .route("/{id}/nearby", get(cities::nearby_cities))
        .with_state(catalog_state.clone());

    let hotel_routes = Router::new()
        .route("/", get(hotels::list_hotels))
        .route("/{id}", get(hotels::get_hotel))
        .with_state(catalog_state);

    let reservation_routes = Router::new()
        .route(
            "/",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route("/{id}", get(reservations::get_reservation))
        .with_state(reservation_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState::new(db));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(health_routes)
        .nest("/api/v1/cities", city_routes)
        .nest("/api/v1/hotels", hotel_routes)
        .nest("/api/v1/reservations", reservation_routes);

    if let Some(handle) = prometheus {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics::prometheus_metrics))
                .with_state(metrics::MetricsState { handle }),
        );
    }

    router
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
