//! Hotel catalog interface

use async_trait::async_trait;

use super::model::{Hotel, NewHotel};
use crate::shared::DomainResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Find a hotel by ID. A missing hotel is `Ok(None)`.
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Hotel>>;

    /// All hotels, ordered by ID
    async fn find_all(&self) -> DomainResult<Vec<Hotel>>;

    /// Store a new hotel and return it with its assigned ID.
    /// Only used to seed the catalog.
    async fn save(&self, hotel: NewHotel) -> DomainResult<Hotel>;

    async fn count(&self) -> DomainResult<u64>;
}
