use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{City, CityEdge};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CityDto {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<City> for CityDto {
    fn from(c: City) -> Self {
        Self {
            id: c.id,
            name: c.name,
            lat: c.lat,
            lon: c.lon,
        }
    }
}

/// Undirected road between two cities
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoadDto {
    pub from: i64,
    pub to: i64,
    pub distance_km: f64,
}

impl From<CityEdge> for RoadDto {
    fn from(e: CityEdge) -> Self {
        Self {
            from: e.from_id,
            to: e.to_id,
            distance_km: e.distance_km,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CityGraphDto {
    pub cities: Vec<CityDto>,
    pub roads: Vec<RoadDto>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbyQuery {
    /// Longest road to follow, in km. Zero or less finds nothing.
    pub radius_km: f64,
}
