//! In-memory repositories for development and testing

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    City, CityEdge, CityRepository, DomainError, DomainResult, Hotel, HotelRepository, NewCity,
    NewHotel, NewReservation, RepositoryProvider, Reservation, ReservationRepository,
};

pub struct InMemoryCityRepository {
    cities: DashMap<i64, City>,
    edges: DashMap<i64, CityEdge>,
    counter: AtomicI64,
    edge_counter: AtomicI64,
}

impl InMemoryCityRepository {
    pub fn new() -> Self {
        Self {
            cities: DashMap::new(),
            edges: DashMap::new(),
            counter: AtomicI64::new(1),
            edge_counter: AtomicI64::new(1),
        }
    }

    fn sorted_edges(&self, keep: impl Fn(&CityEdge) -> bool) -> Vec<CityEdge> {
        let mut edges: Vec<(i64, CityEdge)> = self
            .edges
            .iter()
            .filter(|e| keep(e.value()))
            .map(|e| (*e.key(), e.value().clone()))
            .collect();
        edges.sort_by_key(|(id, _)| *id);
        edges.into_iter().map(|(_, edge)| edge).collect()
    }
}

impl Default for InMemoryCityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CityRepository for InMemoryCityRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<City>> {
        Ok(self.cities.get(&id).map(|c| c.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<City>> {
        let mut cities: Vec<City> = self.cities.iter().map(|e| e.value().clone()).collect();
        cities.sort_by_key(|c| c.id);
        Ok(cities)
    }

    async fn save(&self, city: NewCity) -> DomainResult<City> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        let city = city.with_id(id);
        self.cities.insert(id, city.clone());
        Ok(city)
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.cities.len() as u64)
    }

    async fn save_edge(&self, edge: CityEdge) -> DomainResult<CityEdge> {
        for end in [edge.from_id, edge.to_id] {
            if !self.cities.contains_key(&end) {
                return Err(DomainError::validation(format!(
                    "Edge references missing city id: {}",
                    end
                )));
            }
        }
        let id = self.edge_counter.fetch_add(1, Ordering::SeqCst);
        self.edges.insert(id, edge.clone());
        Ok(edge)
    }

    async fn edges(&self) -> DomainResult<Vec<CityEdge>> {
        Ok(self.sorted_edges(|_| true))
    }

    async fn edges_of(&self, city_id: i64) -> DomainResult<Vec<CityEdge>> {
        Ok(self.sorted_edges(|e| e.other_end(city_id).is_some()))
    }
}

pub struct InMemoryHotelRepository {
    hotels: DashMap<i64, Hotel>,
    counter: AtomicI64,
}

impl InMemoryHotelRepository {
    pub fn new() -> Self {
        Self {
            hotels: DashMap::new(),
            counter: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryHotelRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HotelRepository for InMemoryHotelRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Hotel>> {
        Ok(self.hotels.get(&id).map(|h| h.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Hotel>> {
        let mut hotels: Vec<Hotel> = self.hotels.iter().map(|e| e.value().clone()).collect();
        hotels.sort_by_key(|h| h.id);
        Ok(hotels)
    }

    async fn save(&self, hotel: NewHotel) -> DomainResult<Hotel> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        let hotel = hotel.with_id(id);
        self.hotels.insert(id, hotel.clone());
        Ok(hotel)
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.hotels.len() as u64)
    }
}

pub struct InMemoryReservationRepository {
    reservations: DashMap<i64, Reservation>,
    counter: AtomicI64,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self {
            reservations: DashMap::new(),
            counter: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryReservationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn save(&self, reservation: NewReservation) -> DomainResult<Reservation> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        let reservation = reservation.with_id(id);
        self.reservations.insert(id, reservation.clone());
        Ok(reservation)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Reservation>> {
        Ok(self.reservations.get(&id).map(|r| r.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let mut all: Vec<Reservation> = self
            .reservations
            .iter()
            .map(|e| e.value().clone())
            .collect();
        // ids are handed out in insertion order
        all.sort_by_key(|r| r.id);
        Ok(all)
    }
}

/// Repository provider keeping everything in process memory.
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    cities: InMemoryCityRepository,
    hotels: InMemoryHotelRepository,
    reservations: InMemoryReservationRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn cities(&self) -> &dyn CityRepository {
        &self.cities
    }

    fn hotels(&self) -> &dyn HotelRepository {
        &self.hotels
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{GuestDetails, StayDates};

    #[tokio::test]
    async fn ids_are_assigned_in_order() {
        let repos = InMemoryRepositoryProvider::new();
        let hotel = repos
            .hotels()
            .save(NewHotel::new("MX", 1, 4, 1000.0).unwrap())
            .await
            .unwrap();
        assert_eq!(hotel.id, 1);

        let stay = StayDates::new(
            NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 22).unwrap(),
        )
        .unwrap();
        for name in ["Camila", "Diego", "Elena"] {
            let guest = GuestDetails::new(name, "guest@test.com", 1).unwrap();
            repos
                .reservations()
                .save(NewReservation::new(&hotel, guest, stay))
                .await
                .unwrap();
        }

        let all = repos.reservations().find_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(all[1].guest_name, "Diego");
        assert_eq!(
            repos.reservations().find_by_id(3).await.unwrap().map(|r| r.guest_name),
            Some("Elena".to_string())
        );
    }

    #[tokio::test]
    async fn roads_need_both_cities() {
        let repos = InMemoryRepositoryProvider::new();
        let toluca = repos
            .cities()
            .save(NewCity::new("Toluca", 19.28, -99.65).unwrap())
            .await
            .unwrap();
        let cdmx = repos
            .cities()
            .save(NewCity::new("CDMX", 19.43, -99.13).unwrap())
            .await
            .unwrap();
        assert_eq!((toluca.id, cdmx.id), (1, 2));

        let dangling = CityEdge::new(toluca.id, 9, 10.0).unwrap();
        assert!(matches!(
            repos.cities().save_edge(dangling).await,
            Err(DomainError::Validation(_))
        ));

        let road = CityEdge::new(toluca.id, cdmx.id, 65.0).unwrap();
        repos.cities().save_edge(road.clone()).await.unwrap();
        assert_eq!(repos.cities().edges().await.unwrap(), vec![road.clone()]);
        assert_eq!(repos.cities().edges_of(cdmx.id).await.unwrap(), vec![road]);
        assert_eq!(repos.cities().count().await.unwrap(), 2);
    }
}
