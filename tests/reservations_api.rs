use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use async_trait::async_trait;
use axum::Router;
use bookmx::create_api_router;
use bookmx::domain::{
    CityRepository, DomainError, DomainResult, HotelRepository, NewCity, NewHotel,
    NewReservation, RepositoryProvider, Reservation, ReservationRepository,
};
use bookmx::infrastructure::database::migrator::Migrator;
use bookmx::{InMemoryRepositoryProvider, SeaOrmRepositoryProvider};
use chrono::{Duration, Local, NaiveDate};
use http_body_util::BodyExt;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

/// City 1 ("CDMX") with hotel 1 ("MX", 4 stars, 1000) in it.
async fn seed_mx(repos: &dyn RepositoryProvider) {
    let city = repos
        .cities()
        .save(NewCity::new("CDMX", 19.43, -99.13).unwrap())
        .await
        .unwrap();
    let hotel = repos
        .hotels()
        .save(NewHotel::new("MX", city.id, 4, 1000.0).unwrap())
        .await
        .unwrap();
    assert_eq!((city.id, hotel.id), (1, 1));
}

async fn app() -> Router {
    let repos = Arc::new(InMemoryRepositoryProvider::new());
    seed_mx(repos.as_ref()).await;
    create_api_router(repos, None, None)
}

/// Same data on migrated SQLite. One connection, or each pooled
/// connection would see its own empty in-memory database.
async fn sqlite_app() -> Router {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1);
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let repos = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    seed_mx(repos.as_ref()).await;
    create_api_router(repos, Some(db), None)
}

/// Reservation store whose every call fails like a dead disk.
struct FailingReservations;

fn disk_error() -> DomainError {
    DomainError::Storage("disk I/O error".into())
}

#[async_trait]
impl ReservationRepository for FailingReservations {
    async fn save(&self, _reservation: NewReservation) -> DomainResult<Reservation> {
        Err(disk_error())
    }

    async fn find_by_id(&self, _id: i64) -> DomainResult<Option<Reservation>> {
        Err(disk_error())
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        Err(disk_error())
    }
}

/// Working catalog, broken reservation store.
struct BrokenStore {
    catalog: InMemoryRepositoryProvider,
    reservations: FailingReservations,
}

impl RepositoryProvider for BrokenStore {
    fn cities(&self) -> &dyn CityRepository {
        self.catalog.cities()
    }

    fn hotels(&self) -> &dyn HotelRepository {
        self.catalog.hotels()
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}

async fn broken_app() -> Router {
    let repos = Arc::new(BrokenStore {
        catalog: InMemoryRepositoryProvider::new(),
        reservations: FailingReservations,
    });
    seed_mx(repos.as_ref()).await;
    create_api_router(repos, None, None)
}

fn day(offset: i64) -> String {
    let date: NaiveDate = Local::now().date_naive() + Duration::days(offset);
    date.to_string()
}

fn booking(hotel_id: i64, start: i64, end: i64) -> Value {
    json!({
        "hotel_id": hotel_id,
        "guest_name": "Camila",
        "email": "cami@test.com",
        "num_guests": 2,
        "start_date": day(start),
        "end_date": day(end),
    })
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, body: String) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri("/api/v1/reservations")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn create_returns_201_with_id() {
    let app = app().await;

    let (status, body) = post_json(&app, booking(1, 1, 3).to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(body["hotel"]["id"], 1);
    assert_eq!(body["guest_name"], "Camila");
    assert_eq!(body["num_guests"], 2);
    assert_eq!(body["start_date"], day(1));
    assert_eq!(body["end_date"], day(3));
}

#[tokio::test]
async fn list_on_empty_store_is_200_and_empty() {
    let app = app().await;

    let (status, body) = get(&app, "/api/v1/reservations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn created_reservations_are_listed_and_fetchable() {
    let app = app().await;

    let (_, first) = post_json(&app, booking(1, 1, 3).to_string()).await;
    let (_, second) = post_json(&app, booking(1, 1, 3).to_string()).await;
    assert_ne!(first["id"], second["id"]);

    let (status, list) = get(&app, "/api/v1/reservations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(2));

    let uri = format!("/api/v1/reservations/{}", second["id"]);
    let (status, fetched) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, second);
}

#[tokio::test]
async fn inverted_dates_are_422_and_nothing_is_stored() {
    let app = app().await;

    let (status, body) = post_json(&app, booking(1, 3, 2).to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);

    let (status, body) = post_json(&app, booking(1, 2, 2).to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().starts_with("Validation"));

    let (_, list) = get(&app, "/api/v1/reservations").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn unknown_hotel_is_404_not_422() {
    let app = app().await;

    let (status, body) = post_json(&app, booking(99, 1, 2).to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found: Hotel with id=99");
}

#[tokio::test]
async fn bad_dates_win_over_unknown_hotel() {
    let app = app().await;

    let (status, _) = post_json(&app, booking(99, 3, 2).to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn field_rules_are_422() {
    let app = app().await;

    let mut body = booking(1, 1, 2);
    body["email"] = json!("not-an-email");
    body["num_guests"] = json!(0);
    let (status, res) = post_json(&app, body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error = res["error"].as_str().unwrap();
    assert!(error.contains("email"));
    assert!(error.contains("num_guests"));
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = app().await;

    let (status, body) = post_json(&app, "{\"hotel_id\": 1,".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn unknown_reservation_is_404() {
    let app = app().await;

    let (status, body) = get(&app, "/api/v1/reservations/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found: Reservation with id=42");
}

#[tokio::test]
async fn hotels_are_readable() {
    let app = app().await;

    let (status, hotels) = get(&app, "/api/v1/hotels").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hotels[0]["name"], "MX");
    assert_eq!(hotels[0]["star_rating"], 4);

    let (status, _) = get(&app, "/api/v1/hotels/1").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&app, "/api/v1/hotels/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_memory_backend_and_echoes_request_id() {
    let app = app().await;

    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "trace-me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-request-id"], "trace-me");
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"]["backend"], "memory");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app().await;

    let (status, doc) = get(&app, "/api-doc/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/v1/reservations"]["post"].is_object());
}

#[tokio::test]
async fn sqlite_backend_creates_lists_and_fetches() {
    let app = sqlite_app().await;

    let (status, created) = post_json(&app, booking(1, 1, 3).to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["hotel"]["id"], 1);
    assert_eq!(created["start_date"], day(1));

    let (status, list) = get(&app, "/api/v1/reservations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([created.clone()]));

    let uri = format!("/api/v1/reservations/{}", created["id"]);
    let (status, fetched) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn sqlite_backend_keeps_error_statuses() {
    let app = sqlite_app().await;

    let (status, _) = post_json(&app, booking(99, 1, 2).to_string()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = post_json(&app, booking(1, 3, 2).to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = get(&app, "/api/v1/reservations").await;
    assert_eq!(list, json!([]));

    let (status, health) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["storage"]["backend"], "database");
}

#[tokio::test]
async fn storage_failure_on_create_is_500() {
    let app = broken_app().await;

    let (status, body) = post_json(&app, booking(1, 1, 3).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Storage error: disk I/O error");
}

#[tokio::test]
async fn storage_failure_on_read_is_500() {
    let app = broken_app().await;

    for uri in ["/api/v1/reservations", "/api/v1/reservations/1"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn validation_still_wins_over_a_broken_store() {
    let app = broken_app().await;

    let (status, _) = post_json(&app, booking(1, 3, 2).to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, hotels) = get(&app, "/api/v1/hotels").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hotels[0]["name"], "MX");
}
