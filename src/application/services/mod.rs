//! Application services

mod catalog;
mod reservation;

pub use catalog::{CatalogSeed, CatalogService, SeedReport};
pub use reservation::ReservationService;
