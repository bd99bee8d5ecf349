//! Reservation business logic service
//!
//! HTTP handlers stay thin and delegate here. All checks run before the
//! store is touched, so a failed creation leaves nothing behind.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    CreateReservationDto, DomainError, DomainResult, GuestDetails, NewReservation, Reservation,
    RepositoryProvider, StayDates,
};

/// Service for reservation use-cases
pub struct ReservationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ReservationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Create a reservation.
    ///
    /// Order of checks:
    /// 1. stay dates (`start_date < end_date`), without touching the catalog
    /// 2. guest fields (name, email, party size)
    /// 3. hotel existence, `DomainError::NotFound` when absent
    ///
    /// Identical requests are not deduplicated.
    pub async fn create(&self, dto: CreateReservationDto) -> DomainResult<Reservation> {
        let stay = StayDates::new(dto.start_date, dto.end_date)?;
        let guest = GuestDetails::new(dto.guest_name, dto.email, dto.num_guests)?;

        let hotel = self
            .repos
            .hotels()
            .find_by_id(dto.hotel_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Hotel", "id", dto.hotel_id))?;

        debug!(
            "Booking {} night(s) at hotel {} ({})",
            stay.nights(),
            hotel.id,
            hotel.name
        );

        let reservation = self
            .repos
            .reservations()
            .save(NewReservation::new(&hotel, guest, stay))
            .await?;

        metrics::counter!("reservations_created_total").increment(1);
        info!(
            "Reservation {} created for hotel {} ({} → {})",
            reservation.id, reservation.hotel_id, reservation.start_date, reservation.end_date
        );

        Ok(reservation)
    }

    /// All reservations, empty when none exist
    pub async fn list_all(&self) -> DomainResult<Vec<Reservation>> {
        self.repos.reservations().find_all().await
    }

    pub async fn get(&self, id: i64) -> DomainResult<Option<Reservation>> {
        self.repos.reservations().find_by_id(id).await
    }
}
