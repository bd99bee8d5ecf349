//! Application layer: use-case orchestration over the domain repositories.

pub mod services;

pub use services::{CatalogSeed, CatalogService, ReservationService, SeedReport};
