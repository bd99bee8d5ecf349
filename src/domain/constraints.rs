//! Field constraints shared by the domain entities.
//!
//! Each check returns `DomainError::Validation` naming the offending field.

use validator::ValidateEmail;

use crate::shared::{DomainError, DomainResult};

/// Maximum length of name and email columns.
pub const MAX_TEXT_LEN: usize = 160;

/// Non-blank and at most `max` characters.
pub fn require_text(field: &str, value: &str, max: usize) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{} must not be blank", field)));
    }
    if value.chars().count() > max {
        return Err(DomainError::validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

pub fn require_email(field: &str, value: &str) -> DomainResult<()> {
    require_text(field, value, MAX_TEXT_LEN)?;
    if !value.validate_email() {
        return Err(DomainError::validation(format!(
            "{} must be a valid email address",
            field
        )));
    }
    Ok(())
}

pub fn require_positive_int(field: &str, value: i32) -> DomainResult<()> {
    if value <= 0 {
        return Err(DomainError::validation(format!("{} must be positive", field)));
    }
    Ok(())
}

pub fn require_positive_amount(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::validation(format!("{} must be positive", field)));
    }
    Ok(())
}

/// Finite and within `[-limit, limit]`, as for latitude and longitude.
pub fn require_coordinate(field: &str, value: f64, limit: f64) -> DomainResult<()> {
    if !value.is_finite() || value.abs() > limit {
        return Err(DomainError::validation(format!(
            "{} must be between -{} and {}",
            field, limit, limit
        )));
    }
    Ok(())
}

pub fn require_range(field: &str, value: i32, min: i32, max: i32) -> DomainResult<()> {
    if value < min || value > max {
        return Err(DomainError::validation(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }
    Ok(())
}
