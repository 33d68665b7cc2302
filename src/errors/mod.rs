use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::constants::{ERR_DATABASE, ERR_VALIDATION};

/// Error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "User not found")]
    pub error: String,
    /// Detailed validation errors (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// Crate-wide error type for all request handling failures.
///
/// Store errors are logged with their driver detail but surface to clients as
/// a generic 500 body; validation and not-found get their own status codes.
#[derive(Debug)]
pub enum ApiError {
    ValidationError(Vec<String>),
    NotFound(String),
    Database(sqlx::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ValidationError(errors) => {
                write!(f, "Validation Error: {:?}", errors)
            }
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::Database(err) => write!(f, "Database Error: {}", err),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::ValidationError(errors) => HttpResponse::BadRequest().json(ErrorResponse {
                error: ERR_VALIDATION.to_string(),
                details: Some(errors.clone()),
            }),
            ApiError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
                error: message.clone(),
                details: None,
            }),
            ApiError::Database(err) => {
                // Driver detail stays in the logs, not in the response body.
                log::error!("database error: {}", err);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: ERR_DATABASE.to_string(),
                    details: None,
                })
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = ApiError::ValidationError(vec!["too long".to_string()]);
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let not_found = ApiError::NotFound("User not found".to_string());
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let database = ApiError::Database(sqlx::Error::PoolClosed);
        assert_eq!(database.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_omits_empty_details() {
        let body = serde_json::to_value(ErrorResponse {
            error: "User not found".to_string(),
            details: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "error": "User not found" }));
    }

    #[test]
    fn test_error_body_includes_validation_details() {
        let body = serde_json::to_value(ErrorResponse {
            error: ERR_VALIDATION.to_string(),
            details: Some(vec!["correo must be at most 255 characters".to_string()]),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "error": "Validation failed",
                "details": ["correo must be at most 255 characters"]
            })
        );
    }

    #[test]
    fn test_database_error_body_is_generic() {
        let err = ApiError::Database(sqlx::Error::PoolClosed);
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
