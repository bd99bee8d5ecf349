//! Shared HTTP building blocks: the response envelope, error mapping and
//! the validating JSON extractor.

mod api_response;
mod validated_json;

pub use api_response::{api_error, domain_error, ApiError, ErrorResponse};
pub use validated_json::{ValidatedJson, ValidatedJsonRejection};
