//! Shared HTTP building blocks

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response envelope.
///
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Payload. `null` on error
    pub data: Option<T>,
    /// Error description. Omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler result
pub type HandlerError = (StatusCode, Json<ApiResponse<()>>);

pub type HandlerResult<T> = Result<Json<ApiResponse<T>>, HandlerError>;

/// Map a domain error onto its HTTP status and envelope.
pub fn error_response(err: DomainError) -> HandlerError {
    let (status, message) = match err {
        DomainError::NotFound { entity, .. } => {
            (StatusCode::NOT_FOUND, format!("{} not found", entity))
        }
        DomainError::InvalidField { field, message } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("{}: {}", field, message),
        ),
        DomainError::Conflict(message) => (StatusCode::CONFLICT, message),
        DomainError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
        DomainError::Forbidden(message) => (StatusCode::FORBIDDEN, message),
        DomainError::Database(message) | DomainError::Internal(message) => {
            error!(error = %message, "Request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };
    (status, Json(ApiResponse::error(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_distinct_statuses() {
        let cases = [
            (DomainError::not_found("Listing", "x"), StatusCode::NOT_FOUND),
            (
                DomainError::InvalidField {
                    field: "rating",
                    message: "out of range".into(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (DomainError::Conflict("dup".into()), StatusCode::CONFLICT),
            (DomainError::Unauthorized("no".into()), StatusCode::UNAUTHORIZED),
            (DomainError::Forbidden("no".into()), StatusCode::FORBIDDEN),
            (
                DomainError::Database("disk".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(error_response(err).0, expected);
        }
    }

    #[test]
    fn internal_details_are_not_leaked() {
        let (_, Json(body)) = error_response(DomainError::Database("secret table".into()));
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Internal server error"));
    }

    #[test]
    fn field_errors_name_the_field() {
        let (_, Json(body)) = error_response(DomainError::InvalidField {
            field: "check_out",
            message: "must be after check_in".into(),
        });
        assert_eq!(
            body.error.as_deref(),
            Some("check_out: must be after check_in")
        );
    }
}
