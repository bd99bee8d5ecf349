//! Wire shapes for `/api/v1/reservations`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CreateReservationDto, Reservation};

/// Body of `POST /api/v1/reservations`
///
/// Only shape checks live here; `start_date < end_date` and hotel
/// existence are enforced by the service.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservationRequest {
    pub hotel_id: i64,
    #[validate(length(min = 1, max = 160, message = "must be 1 to 160 characters"))]
    pub guest_name: String,
    #[validate(
        email(message = "must be a valid email address"),
        length(max = 160, message = "must be at most 160 characters")
    )]
    pub email: String,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub num_guests: i32,
    /// Check-in, `YYYY-MM-DD`
    #[schema(example = "2025-11-20")]
    pub start_date: NaiveDate,
    /// Check-out, `YYYY-MM-DD`, after `start_date`
    #[schema(example = "2025-11-22")]
    pub end_date: NaiveDate,
}

impl From<CreateReservationRequest> for CreateReservationDto {
    fn from(req: CreateReservationRequest) -> Self {
        Self {
            hotel_id: req.hotel_id,
            guest_name: req.guest_name,
            email: req.email,
            num_guests: req.num_guests,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HotelRefDto {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i64,
    pub hotel: HotelRefDto,
    pub guest_name: String,
    pub email: String,
    pub num_guests: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            hotel: HotelRefDto { id: r.hotel_id },
            guest_name: r.guest_name,
            email: r.email,
            num_guests: r.num_guests,
            start_date: r.start_date,
            end_date: r.end_date,
        }
    }
}
