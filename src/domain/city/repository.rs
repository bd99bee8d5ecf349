//! City and road storage interface

use async_trait::async_trait;

use super::model::{City, CityEdge, NewCity};
use crate::shared::DomainResult;

#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<City>>;

    /// All cities, ordered by ID
    async fn find_all(&self) -> DomainResult<Vec<City>>;

    async fn save(&self, city: NewCity) -> DomainResult<City>;

    async fn count(&self) -> DomainResult<u64>;

    /// Store a road. Both endpoints must already exist.
    async fn save_edge(&self, edge: CityEdge) -> DomainResult<CityEdge>;

    /// Every road, in insertion order
    async fn edges(&self) -> DomainResult<Vec<CityEdge>>;

    /// Roads with `city_id` at either end
    async fn edges_of(&self, city_id: i64) -> DomainResult<Vec<CityEdge>>;
}
