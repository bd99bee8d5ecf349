//! Catalog service
//!
//! Read access to hotels and cities for the API, the nearby-city search,
//! and the one-time seeding done at startup.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::city::{nearby_within_radius, validate_graph};
use crate::domain::constraints::require_positive_amount;
use crate::domain::{
    City, CityEdge, DomainError, DomainResult, Hotel, NewCity, NewHotel, RepositoryProvider,
};

/// Catalog contents for an empty store.
///
/// Roads and hotels refer to cities by name. Ids only exist once the
/// cities are stored, so they are resolved by [`CatalogService::seed`].
#[derive(Debug, Default)]
pub struct CatalogSeed {
    cities: Vec<NewCity>,
    roads: Vec<(usize, usize, f64)>,
    hotels: Vec<(usize, NewHotel)>,
}

impl CatalogSeed {
    pub fn new() -> Self {
        Self::default()
    }

    fn city_index(&self, name: &str) -> DomainResult<usize> {
        self.cities
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| DomainError::validation(format!("Unknown city \"{}\"", name)))
    }

    pub fn add_city(&mut self, city: NewCity) -> DomainResult<()> {
        if self.city_index(&city.name).is_ok() {
            return Err(DomainError::validation(format!(
                "Duplicated city \"{}\"",
                city.name
            )));
        }
        self.cities.push(city);
        Ok(())
    }

    pub fn add_road(&mut self, from: &str, to: &str, distance_km: f64) -> DomainResult<()> {
        require_positive_amount("distance_km", distance_km)?;
        let (a, b) = (self.city_index(from)?, self.city_index(to)?);
        if a == b {
            return Err(DomainError::validation(format!(
                "Road from \"{}\" leads back to itself",
                from
            )));
        }
        self.roads.push((a, b, distance_km));
        Ok(())
    }

    pub fn add_hotel(
        &mut self,
        city: &str,
        name: &str,
        star_rating: i32,
        price_per_night: f64,
    ) -> DomainResult<()> {
        let index = self.city_index(city)?;
        // city_id is filled in once the city has one
        let hotel = NewHotel::new(name, 0, star_rating, price_per_night)?;
        self.hotels.push((index, hotel));
        Ok(())
    }
}

/// What a seeding run inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub cities: usize,
    pub roads: usize,
    pub hotels: usize,
}

pub struct CatalogService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CatalogService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list_hotels(&self) -> DomainResult<Vec<Hotel>> {
        self.repos.hotels().find_all().await
    }

    pub async fn get_hotel(&self, id: i64) -> DomainResult<Option<Hotel>> {
        self.repos.hotels().find_by_id(id).await
    }

    pub async fn list_cities(&self) -> DomainResult<Vec<City>> {
        self.repos.cities().find_all().await
    }

    pub async fn get_city(&self, id: i64) -> DomainResult<Option<City>> {
        self.repos.cities().find_by_id(id).await
    }

    /// Every city and every road
    pub async fn city_graph(&self) -> DomainResult<(Vec<City>, Vec<CityEdge>)> {
        let cities = self.repos.cities().find_all().await?;
        let edges = self.repos.cities().edges().await?;
        Ok((cities, edges))
    }

    /// Cities one road away from `city_id` with that road at most
    /// `radius_km` long.
    ///
    /// An unknown city is `NotFound`. A radius of zero or less (or NaN)
    /// gives an empty list.
    pub async fn nearby_cities(&self, city_id: i64, radius_km: f64) -> DomainResult<Vec<City>> {
        if self.repos.cities().find_by_id(city_id).await?.is_none() {
            return Err(DomainError::not_found("City", "id", city_id));
        }
        if radius_km.is_nan() || radius_km <= 0.0 {
            return Ok(Vec::new());
        }

        let edges = self.repos.cities().edges_of(city_id).await?;
        let ids = nearby_within_radius(city_id, radius_km, &edges);
        debug!("City {} has {} neighbour(s) within {} km", city_id, ids.len(), radius_km);

        let mut cities = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(city) = self.repos.cities().find_by_id(id).await? {
                cities.push(city);
            }
        }
        Ok(cities)
    }

    /// Load `seed` when the store has neither cities nor hotels.
    ///
    /// Cities go first so roads and hotels can point at their ids.
    pub async fn seed(&self, seed: CatalogSeed) -> DomainResult<SeedReport> {
        let cities = self.repos.cities().count().await?;
        let hotels = self.repos.hotels().count().await?;
        if cities > 0 || hotels > 0 {
            info!(
                "Catalog already has {} city(ies) and {} hotel(s), skipping seed",
                cities, hotels
            );
            return Ok(SeedReport::default());
        }

        let mut stored = Vec::with_capacity(seed.cities.len());
        for city in seed.cities {
            let city = self.repos.cities().save(city).await?;
            info!("Seeded city {} ({})", city.id, city.name);
            stored.push(city);
        }

        let roads = seed
            .roads
            .iter()
            .map(|&(a, b, km)| CityEdge::new(stored[a].id, stored[b].id, km))
            .collect::<DomainResult<Vec<_>>>()?;
        validate_graph(&stored, &roads)?;
        for road in &roads {
            self.repos.cities().save_edge(road.clone()).await?;
        }

        let mut report = SeedReport {
            cities: stored.len(),
            roads: roads.len(),
            hotels: 0,
        };
        for (index, mut hotel) in seed.hotels {
            hotel.city_id = stored[index].id;
            let hotel = self.repos.hotels().save(hotel).await?;
            info!("Seeded hotel {} ({})", hotel.id, hotel.name);
            report.hotels += 1;
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn seed_data() -> CatalogSeed {
        let mut seed = CatalogSeed::new();
        seed.add_city(NewCity::new("Toluca", 19.28, -99.65).unwrap()).unwrap();
        seed.add_city(NewCity::new("CDMX", 19.43, -99.13).unwrap()).unwrap();
        seed.add_city(NewCity::new("Puebla", 19.04, -98.21).unwrap()).unwrap();
        seed.add_road("Toluca", "CDMX", 65.0).unwrap();
        seed.add_road("CDMX", "Puebla", 130.0).unwrap();
        seed.add_hotel("CDMX", "MX", 4, 1000.0).unwrap();
        seed.add_hotel("Puebla", "Casa Puebla", 5, 2400.0).unwrap();
        seed
    }

    async fn seeded() -> CatalogService {
        let service = CatalogService::new(Arc::new(InMemoryRepositoryProvider::new()));
        service.seed(seed_data()).await.unwrap();
        service
    }

    fn names(cities: &[City]) -> Vec<&str> {
        cities.iter().map(|c| c.name.as_str()).collect()
    }

    #[tokio::test]
    async fn seeds_empty_catalog_once() {
        let service = CatalogService::new(Arc::new(InMemoryRepositoryProvider::new()));

        let report = service.seed(seed_data()).await.unwrap();
        assert_eq!(
            report,
            SeedReport {
                cities: 3,
                roads: 2,
                hotels: 2
            }
        );
        assert_eq!(service.seed(seed_data()).await.unwrap(), SeedReport::default());

        let hotels = service.list_hotels().await.unwrap();
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].name, "MX");
        assert_eq!(
            service.get_hotel(hotels[1].id).await.unwrap().map(|h| h.name),
            Some("Casa Puebla".to_string())
        );
    }

    #[tokio::test]
    async fn hotels_point_at_their_seeded_city() {
        let service = seeded().await;
        let hotels = service.list_hotels().await.unwrap();
        let city = service.get_city(hotels[0].city_id).await.unwrap().unwrap();
        assert_eq!(city.name, "CDMX");
        let (cities, roads) = service.city_graph().await.unwrap();
        assert_eq!(names(&cities), vec!["Toluca", "CDMX", "Puebla"]);
        assert_eq!(roads.len(), 2);
    }

    #[test]
    fn seed_rejects_bad_references() {
        let mut seed = seed_data();
        assert!(seed.add_city(NewCity::new("CDMX", 0.0, 0.0).unwrap()).is_err());
        assert!(seed.add_road("CDMX", "Oaxaca", 10.0).is_err());
        assert!(seed.add_road("CDMX", "CDMX", 10.0).is_err());
        assert!(seed.add_road("CDMX", "Toluca", 0.0).is_err());
        assert!(seed.add_hotel("Oaxaca", "Casa", 3, 100.0).is_err());
        assert!(seed.add_hotel("CDMX", "Casa", 9, 100.0).is_err());
    }

    // in-memory ids follow seed order: Toluca 1, CDMX 2, Puebla 3

    #[tokio::test]
    async fn nearby_uses_roads_in_both_directions() {
        let service = seeded().await;

        let near = service.nearby_cities(2, 100.0).await.unwrap();
        assert_eq!(names(&near), vec!["Toluca"]);
        let near = service.nearby_cities(2, 130.0).await.unwrap();
        assert_eq!(names(&near), vec!["Toluca", "Puebla"]);
        let near = service.nearby_cities(3, 500.0).await.unwrap();
        assert_eq!(names(&near), vec!["CDMX"]);
    }

    #[tokio::test]
    async fn non_positive_radius_is_empty() {
        let service = seeded().await;
        assert!(service.nearby_cities(2, 0.0).await.unwrap().is_empty());
        assert!(service.nearby_cities(2, -5.0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn nearby_for_unknown_city_is_not_found() {
        let service = seeded().await;
        assert!(matches!(
            service.nearby_cities(99, 100.0).await,
            Err(DomainError::NotFound { entity: "City", .. })
        ));
        assert!(matches!(
            service.nearby_cities(99, 0.0).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn unknown_hotel_is_none() {
        let service = CatalogService::new(Arc::new(InMemoryRepositoryProvider::new()));
        assert!(service.get_hotel(42).await.unwrap().is_none());
    }
}
