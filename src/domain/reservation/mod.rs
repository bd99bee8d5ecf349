//! Reservation aggregate
//!
//! Contains the Reservation entity, its value objects, and the store interface.

pub mod dto_create;
pub mod model;
pub mod repository;

pub use dto_create::CreateReservationDto;
pub use model::{GuestDetails, NewReservation, Reservation, StayDates};
pub use repository::ReservationRepository;
