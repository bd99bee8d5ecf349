//! Hotel aggregate
//!
//! The read-only catalog the reservation flow looks hotels up in.

pub mod model;
pub mod repository;

pub use model::{Hotel, NewHotel, MAX_STARS, MIN_STARS};
pub use repository::HotelRepository;
