use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::ReservationService;
use crate::domain::DomainError;
use crate::interfaces::http::common::{domain_error, ApiError, ErrorResponse, ValidatedJson};

use super::dto::{CreateReservationRequest, ReservationDto};

#[derive(Clone)]
pub struct ReservationAppState {
    pub service: Arc<ReservationService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 404, description = "Hotel does not exist", body = ErrorResponse),
        (status = 422, description = "Invalid dates or guest details", body = ErrorResponse)
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationAppState>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationDto>), ApiError> {
    let reservation = state
        .service
        .create(request.into())
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(reservation.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = "Reservations",
    responses(
        (status = 200, description = "All reservations, possibly none", body = Vec<ReservationDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_reservations(
    State(state): State<ReservationAppState>,
) -> Result<Json<Vec<ReservationDto>>, ApiError> {
    let reservations = state.service.list_all().await.map_err(domain_error)?;
    Ok(Json(reservations.into_iter().map(ReservationDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    params(("id" = i64, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ReservationDto),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReservationDto>, ApiError> {
    match state.service.get(id).await.map_err(domain_error)? {
        Some(reservation) => Ok(Json(reservation.into())),
        None => Err(domain_error(DomainError::not_found("Reservation", "id", id))),
    }
}
