//! Road graph queries
//!
//! Roads are undirected: an edge stored as `a → b` makes each city a
//! neighbour of the other. "Nearby" means one road away, no path search.

use std::collections::{HashMap, HashSet};

use super::model::{City, CityEdge};
use crate::shared::{DomainError, DomainResult};

/// Check a set of cities and roads before it is stored.
///
/// Fails on a blank city name, a repeated city id, a road with a
/// non-positive distance or a road pointing at a city not in `cities`.
pub fn validate_graph(cities: &[City], edges: &[CityEdge]) -> DomainResult<()> {
    let mut ids = HashSet::with_capacity(cities.len());
    for city in cities {
        if city.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "City {} must have a name",
                city.id
            )));
        }
        if !ids.insert(city.id) {
            return Err(DomainError::validation(format!(
                "Duplicated city id: {}",
                city.id
            )));
        }
    }

    for edge in edges {
        if !edge.distance_km.is_finite() || edge.distance_km <= 0.0 {
            return Err(DomainError::validation(format!(
                "Edge {} -> {} must have positive distance_km",
                edge.from_id, edge.to_id
            )));
        }
        for end in [edge.from_id, edge.to_id] {
            if !ids.contains(&end) {
                return Err(DomainError::validation(format!(
                    "Edge references missing city id: {}",
                    end
                )));
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    pub city_id: i64,
    pub distance_km: f64,
}

/// Neighbour lists keyed by city id, built from undirected roads.
#[derive(Debug, Default)]
pub struct Adjacency {
    neighbours: HashMap<i64, Vec<Neighbour>>,
}

impl Adjacency {
    pub fn from_edges(edges: &[CityEdge]) -> Self {
        let mut neighbours: HashMap<i64, Vec<Neighbour>> = HashMap::new();
        for edge in edges {
            neighbours.entry(edge.from_id).or_default().push(Neighbour {
                city_id: edge.to_id,
                distance_km: edge.distance_km,
            });
            neighbours.entry(edge.to_id).or_default().push(Neighbour {
                city_id: edge.from_id,
                distance_km: edge.distance_km,
            });
        }
        Self { neighbours }
    }

    pub fn neighbours(&self, city_id: i64) -> &[Neighbour] {
        self.neighbours
            .get(&city_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Direct neighbours whose road is at most `radius_km` long, each id
    /// once, in road order. A radius that is not above zero finds nothing.
    pub fn within_radius(&self, source_id: i64, radius_km: f64) -> Vec<i64> {
        if radius_km.is_nan() || radius_km <= 0.0 {
            return Vec::new();
        }
        let mut seen = HashSet::new();
        self.neighbours(source_id)
            .iter()
            .filter(|n| n.distance_km <= radius_km)
            .filter(|n| seen.insert(n.city_id))
            .map(|n| n.city_id)
            .collect()
    }
}

pub fn nearby_within_radius(source_id: i64, radius_km: f64, edges: &[CityEdge]) -> Vec<i64> {
    Adjacency::from_edges(edges).within_radius(source_id, radius_km)
}
