//! Domain layer: entities, value objects and repository interfaces.

pub mod city;
pub mod constraints;
pub mod hotel;
pub mod repositories;
pub mod reservation;

pub use city::{City, CityEdge, CityRepository, NewCity};
pub use hotel::{Hotel, HotelRepository, NewHotel};
pub use repositories::RepositoryProvider;
pub use reservation::{
    CreateReservationDto, GuestDetails, NewReservation, Reservation, ReservationRepository,
    StayDates,
};

pub use crate::shared::errors::{DomainError, DomainResult};
