//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{CityRepository, HotelRepository, RepositoryProvider, ReservationRepository};

use super::city_repository::SeaOrmCityRepository;
use super::hotel_repository::SeaOrmHotelRepository;
use super::reservation_repository::SeaOrmReservationRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    cities: SeaOrmCityRepository,
    hotels: SeaOrmHotelRepository,
    reservations: SeaOrmReservationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            cities: SeaOrmCityRepository::new(db.clone()),
            hotels: SeaOrmHotelRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
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
