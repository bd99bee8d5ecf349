//! Reservation repository interface

use async_trait::async_trait;

use super::model::{NewReservation, Reservation};
use crate::shared::DomainResult;

/// Append-only reservation store.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Save a new reservation and return it with its assigned ID
    async fn save(&self, reservation: NewReservation) -> DomainResult<Reservation>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Reservation>>;

    /// All reservations in insertion order
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;
}
