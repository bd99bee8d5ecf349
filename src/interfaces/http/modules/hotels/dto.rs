use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Hotel;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HotelDto {
    pub id: i64,
    pub name: String,
    /// See `/api/v1/cities/{id}`
    pub city_id: i64,
    /// 1 to 5
    pub star_rating: i32,
    pub price_per_night: f64,
}

impl From<Hotel> for HotelDto {
    fn from(h: Hotel) -> Self {
        Self {
            id: h.id,
            name: h.name,
            city_id: h.city_id,
            star_rating: h.star_rating,
            price_per_night: h.price_per_night,
        }
    }
}
