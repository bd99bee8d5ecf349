//! City and road entities

use crate::domain::constraints::{
    require_coordinate, require_positive_amount, require_text, MAX_TEXT_LEN,
};
use crate::shared::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A city that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCity {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl NewCity {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> DomainResult<Self> {
        let name = name.into();
        require_text("name", &name, MAX_TEXT_LEN)?;
        require_coordinate("lat", lat, 90.0)?;
        require_coordinate("lon", lon, 180.0)?;
        Ok(Self { name, lat, lon })
    }

    pub fn with_id(self, id: i64) -> City {
        City {
            id,
            name: self.name,
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// Road between two cities. Direction does not matter.
#[derive(Debug, Clone, PartialEq)]
pub struct CityEdge {
    pub from_id: i64,
    pub to_id: i64,
    pub distance_km: f64,
}

impl CityEdge {
    pub fn new(from_id: i64, to_id: i64, distance_km: f64) -> DomainResult<Self> {
        require_positive_amount("distance_km", distance_km)?;
        if from_id == to_id {
            return Err(DomainError::validation(format!(
                "Edge must connect two different cities (got {} twice)",
                from_id
            )));
        }
        Ok(Self {
            from_id,
            to_id,
            distance_km,
        })
    }

    /// The endpoint opposite `city_id`, if the edge touches it.
    pub fn other_end(&self, city_id: i64) -> Option<i64> {
        if self.from_id == city_id {
            Some(self.to_id)
        } else if self.to_id == city_id {
            Some(self.from_id)
        } else {
            None
        }
    }
}
