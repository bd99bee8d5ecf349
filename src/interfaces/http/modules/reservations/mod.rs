//! Reservation endpoints: create, list and fetch by id

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
