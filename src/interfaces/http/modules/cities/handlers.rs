use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::DomainError;
use crate::interfaces::http::common::{api_error, domain_error, ApiError, ErrorResponse};
use crate::interfaces::http::modules::hotels::CatalogState;

use super::dto::{CityDto, CityGraphDto, NearbyQuery, RoadDto};

#[utoipa::path(
    get,
    path = "/api/v1/cities",
    tag = "Cities",
    responses(
        (status = 200, description = "Every city", body = Vec<CityDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_cities(State(state): State<CatalogState>) -> Result<Json<Vec<CityDto>>, ApiError> {
    let cities = state.catalog.list_cities().await.map_err(domain_error)?;
    Ok(Json(cities.into_iter().map(CityDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/cities/graph",
    tag = "Cities",
    responses(
        (status = 200, description = "Cities and the roads between them", body = CityGraphDto),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn city_graph(State(state): State<CatalogState>) -> Result<Json<CityGraphDto>, ApiError> {
    let (cities, roads) = state.catalog.city_graph().await.map_err(domain_error)?;
    Ok(Json(CityGraphDto {
        cities: cities.into_iter().map(CityDto::from).collect(),
        roads: roads.into_iter().map(RoadDto::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/cities/{id}",
    tag = "Cities",
    params(("id" = i64, Path, description = "City ID")),
    responses(
        (status = 200, description = "City details", body = CityDto),
        (status = 404, description = "No such city", body = ErrorResponse)
    )
)]
pub async fn get_city(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<Json<CityDto>, ApiError> {
    let city = state
        .catalog
        .get_city(id)
        .await
        .and_then(|found| found.ok_or_else(|| DomainError::not_found("City", "id", id)))
        .map_err(domain_error)?;
    Ok(Json(city.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/cities/{id}/nearby",
    tag = "Cities",
    params(("id" = i64, Path, description = "City ID"), NearbyQuery),
    responses(
        (status = 200, description = "Cities one road away within the radius", body = Vec<CityDto>),
        (status = 400, description = "Missing or non-numeric radius_km", body = ErrorResponse),
        (status = 404, description = "No such city", body = ErrorResponse)
    )
)]
pub async fn nearby_cities(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
    query: Result<Query<NearbyQuery>, QueryRejection>,
) -> Result<Json<Vec<CityDto>>, ApiError> {
    let Query(query) =
        query.map_err(|rejection| api_error(StatusCode::BAD_REQUEST, rejection.body_text()))?;
    let cities = state
        .catalog
        .nearby_cities(id, query.radius_km)
        .await
        .map_err(domain_error)?;
    Ok(Json(cities.into_iter().map(CityDto::from).collect()))
}
