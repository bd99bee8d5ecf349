//! Hotel domain entity

use crate::domain::constraints::{
    require_positive_amount, require_range, require_text, MAX_TEXT_LEN,
};
use crate::shared::DomainResult;

pub const MIN_STARS: i32 = 1;
pub const MAX_STARS: i32 = 5;

/// A hotel in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    /// Assigned by the store
    pub id: i64,
    pub name: String,
    /// City the hotel is in
    pub city_id: i64,
    /// 1–5
    pub star_rating: i32,
    pub price_per_night: f64,
}

/// A hotel that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHotel {
    pub name: String,
    pub city_id: i64,
    pub star_rating: i32,
    pub price_per_night: f64,
}

impl NewHotel {
    /// Build a hotel record, enforcing the catalog constraints.
    pub fn new(
        name: impl Into<String>,
        city_id: i64,
        star_rating: i32,
        price_per_night: f64,
    ) -> DomainResult<Self> {
        let name = name.into();
        require_text("name", &name, MAX_TEXT_LEN)?;
        require_range("star_rating", star_rating, MIN_STARS, MAX_STARS)?;
        require_positive_amount("price_per_night", price_per_night)?;

        Ok(Self {
            name,
            city_id,
            star_rating,
            price_per_night,
        })
    }

    pub fn with_id(self, id: i64) -> Hotel {
        Hotel {
            id,
            name: self.name,
            city_id: self.city_id,
            star_rating: self.star_rating,
            price_per_night: self.price_per_night,
        }
    }
}
