//! Reservation domain entity

use chrono::NaiveDate;

use crate::domain::constraints::{
    require_email, require_positive_int, require_text, MAX_TEXT_LEN,
};
use crate::domain::hotel::Hotel;
use crate::shared::{DomainError, DomainResult};

/// Check-in / check-out pair with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    start: NaiveDate,
    end: NaiveDate,
}

impl StayDates {
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::validation(format!(
                "end_date ({}) must be after start_date ({})",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Always at least 1
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Guest-supplied details of a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDetails {
    pub guest_name: String,
    pub email: String,
    pub num_guests: i32,
}

impl GuestDetails {
    pub fn new(
        guest_name: impl Into<String>,
        email: impl Into<String>,
        num_guests: i32,
    ) -> DomainResult<Self> {
        let guest_name = guest_name.into();
        let email = email.into();
        require_text("guest_name", &guest_name, MAX_TEXT_LEN)?;
        require_email("email", &email)?;
        require_positive_int("num_guests", num_guests)?;

        Ok(Self {
            guest_name,
            email,
            num_guests,
        })
    }
}

/// A stored reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// Assigned by the store
    pub id: i64,
    /// Hotel the stay is booked at (checked to exist at creation only)
    pub hotel_id: i64,
    pub guest_name: String,
    pub email: String,
    pub num_guests: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Reservation {
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// A reservation that has not been stored yet.
///
/// Can only be built from a resolved [`Hotel`], so holding one means the
/// hotel existed when it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub hotel_id: i64,
    pub guest_name: String,
    pub email: String,
    pub num_guests: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewReservation {
    pub fn new(hotel: &Hotel, guest: GuestDetails, stay: StayDates) -> Self {
        Self {
            hotel_id: hotel.id,
            guest_name: guest.guest_name,
            email: guest.email,
            num_guests: guest.num_guests,
            start_date: stay.start(),
            end_date: stay.end(),
        }
    }

    pub fn with_id(self, id: i64) -> Reservation {
        Reservation {
            id,
            hotel_id: self.hotel_id,
            guest_name: self.guest_name,
            email: self.email,
            num_guests: self.num_guests,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hotel() -> Hotel {
        Hotel {
            id: 1,
            name: "MX".into(),
            city_id: 1,
            star_rating: 4,
            price_per_night: 1000.0,
        }
    }

    #[test]
    fn stay_requires_start_before_end() {
        let d = date(2025, 11, 20);
        assert!(StayDates::new(d, d + Duration::days(2)).is_ok());
        assert!(matches!(
            StayDates::new(d, d),
            Err(DomainError::Validation(_))
        ));
        assert!(StayDates::new(d + Duration::days(3), d + Duration::days(2)).is_err());
    }

    #[test]
    fn stay_counts_nights() {
        let stay = StayDates::new(date(2025, 11, 20), date(2025, 11, 22)).unwrap();
        assert_eq!(stay.nights(), 2);
    }

    #[test]
    fn guest_details_constraints() {
        assert!(GuestDetails::new("Camila", "cami@test.com", 2).is_ok());
        assert!(GuestDetails::new("", "cami@test.com", 2).is_err());
        assert!(GuestDetails::new("Camila", "cami", 2).is_err());
        assert!(GuestDetails::new("Camila", "cami@test.com", 0).is_err());
        assert!(GuestDetails::new("a".repeat(161), "cami@test.com", 1).is_err());
    }

    #[test]
    fn new_reservation_takes_hotel_id_and_fields() {
        let stay = StayDates::new(date(2025, 11, 20), date(2025, 11, 22)).unwrap();
        let guest = GuestDetails::new("Camila", "cami@test.com", 2).unwrap();

        let r = NewReservation::new(&hotel(), guest, stay).with_id(10);

        assert_eq!(r.id, 10);
        assert_eq!(r.hotel_id, 1);
        assert_eq!(r.guest_name, "Camila");
        assert_eq!(r.email, "cami@test.com");
        assert_eq!(r.num_guests, 2);
        assert_eq!(r.start_date, date(2025, 11, 20));
        assert_eq!(r.end_date, date(2025, 11, 22));
        assert_eq!(r.nights(), 2);
    }
}
