//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod city_repository;
pub mod hotel_repository;
pub mod repository_provider;
pub mod reservation_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
