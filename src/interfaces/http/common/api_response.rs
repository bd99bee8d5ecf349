//! Error envelope and `DomainError` → HTTP status mapping

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Body of every error response: `{"success": false, "error": "..."}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// Rejection returned by every handler
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(message)))
}

/// Map a domain failure onto its HTTP status:
///
/// - `Validation` → 422
/// - `NotFound` → 404
/// - `Storage` → 500
pub fn domain_error(e: DomainError) -> ApiError {
    let status = match &e {
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Request failed: {}", e);
    } else {
        warn!("Request rejected: {}", e);
    }

    api_error(status, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_distinct_per_kind() {
        let (validation, _) = domain_error(DomainError::validation("bad dates"));
        let (missing, body) = domain_error(DomainError::not_found("Hotel", "id", 99));
        let (storage, _) = domain_error(DomainError::Storage("down".into()));

        assert_eq!(validation, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(missing, StatusCode::NOT_FOUND);
        assert_eq!(storage, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.success);
        assert_eq!(body.error, "Not found: Hotel with id=99");
    }

    #[test]
    fn error_envelope_shape() {
        let json = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "boom"}));
    }
}
