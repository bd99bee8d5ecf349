//! `Json<T>` plus `validator` checks
//!
//! Rejections use the same error envelope as the rest of the API:
//!
//! - unparseable body → 400
//! - body that parses but does not fit `T` (missing field, wrong type) → 422
//! - missing `content-type: application/json` → 415
//! - `Validate::validate()` failure → 422, one `field: message` per problem

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::api_error;

/// Deserialize the body as JSON and run `Validate` on it.
///
/// ```ignore
/// async fn create(ValidatedJson(body): ValidatedJson<CreateReservationRequest>) { .. }
/// ```
pub struct ValidatedJson<T>(pub T);

pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Invalid(ValidationErrors),
}

/// Flatten field errors into `field: message; field: message`, sorted by
/// field so the output is stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let parts: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, msg)
            })
        })
        .collect();

    if parts.is_empty() {
        "Validation failed".to_string()
    } else {
        parts.join("; ")
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Json(rejection) => {
                let status = rejection.status();
                tracing::warn!("Rejected request body ({}): {}", status, rejection.body_text());
                api_error(status, format!("Invalid JSON: {}", rejection.body_text()))
                    .into_response()
            }
            Self::Invalid(errors) => {
                let message = describe(&errors);
                tracing::warn!("Request body failed validation: {}", message);
                api_error(StatusCode::UNPROCESSABLE_ENTITY, message).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value.validate().map_err(ValidatedJsonRejection::Invalid)?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Guest {
        #[validate(length(min = 1, max = 20))]
        guest_name: String,
        #[validate(email)]
        email: String,
        #[validate(range(min = 1))]
        num_guests: i32,
    }

    async fn echo(ValidatedJson(guest): ValidatedJson<Guest>) -> String {
        guest.guest_name
    }

    async fn post_raw(body: &str, content_type: Option<&str>) -> (StatusCode, serde_json::Value) {
        let app = Router::new().route("/guests", post(echo));
        let mut req = Request::builder().method("POST").uri("/guests");
        if let Some(ct) = content_type {
            req = req.header("content-type", ct);
        }
        let resp = app
            .oneshot(req.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn accepts_valid_body() {
        let (status, _) = post_raw(
            r#"{"guest_name":"Camila","email":"cami@test.com","num_guests":2}"#,
            Some("application/json"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn syntax_error_is_400() {
        let (status, body) = post_raw("{not json", Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn missing_content_type_is_415() {
        let (status, _) = post_raw("{}", None).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn rule_violations_are_422_with_field_names() {
        let (status, body) = post_raw(
            r#"{"guest_name":"","email":"nope","num_guests":0}"#,
            Some("application/json"),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("email: "));
        assert!(error.contains("guest_name: "));
        assert!(error.contains("num_guests: "));
    }
}
