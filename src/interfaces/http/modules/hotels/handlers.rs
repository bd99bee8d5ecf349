use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::application::CatalogService;
use crate::domain::DomainError;
use crate::interfaces::http::common::{domain_error, ApiError, ErrorResponse};

use super::dto::HotelDto;

#[derive(Clone)]
pub struct CatalogState {
    pub catalog: Arc<CatalogService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    tag = "Hotels",
    responses(
        (status = 200, description = "Every hotel in the catalog", body = Vec<HotelDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_hotels(State(state): State<CatalogState>) -> Result<Json<Vec<HotelDto>>, ApiError> {
    let hotels = state.catalog.list_hotels().await.map_err(domain_error)?;
    Ok(Json(hotels.into_iter().map(HotelDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels/{id}",
    tag = "Hotels",
    params(("id" = i64, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel details", body = HotelDto),
        (status = 404, description = "No such hotel", body = ErrorResponse)
    )
)]
pub async fn get_hotel(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<Json<HotelDto>, ApiError> {
    let hotel = state
        .catalog
        .get_hotel(id)
        .await
        .and_then(|found| found.ok_or_else(|| DomainError::not_found("Hotel", "id", id)))
        .map_err(domain_error)?;
    Ok(Json(hotel.into()))
}
