use chrono::NaiveDate;

/// Input of the reservation creation use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReservationDto {
    pub hotel_id: i64,
    pub guest_name: String,
    pub email: String,
    pub num_guests: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
