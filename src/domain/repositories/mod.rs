//! Repository access for the domain layer
//!
//! `RepositoryProvider` gives services unified access to every
//! per-aggregate repository without knowing which backend holds them.

use super::city::CityRepository;
use super::hotel::HotelRepository;
use super::reservation::ReservationRepository;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let hotel = repos.hotels().find_by_id(1).await?;
///     let all = repos.reservations().find_all().await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn cities(&self) -> &dyn CityRepository;
    fn hotels(&self) -> &dyn HotelRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
}
