//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating or updating a user.
///
/// Both fields are optional and format-free; update replaces both columns
/// with whatever is given here, so an omitted field clears the stored value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    /// Display name (max 255 characters)
    #[validate(length(max = 255, message = "nombre must be at most 255 characters"))]
    #[schema(example = "Ana")]
    pub nombre: Option<String>,
    /// Email address (max 255 characters, no format constraint)
    #[validate(length(max = 255, message = "correo must be at most 255 characters"))]
    #[schema(example = "ana@example.com")]
    pub correo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omitted_fields_deserialize_to_none() {
        let payload: UserPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.nombre.is_none());
        assert!(payload.correo.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_full_payload_deserializes() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"nombre":"Ana","correo":"ana@example.com"}"#).unwrap();
        assert_eq!(payload.nombre.as_deref(), Some("Ana"));
        assert_eq!(payload.correo.as_deref(), Some("ana@example.com"));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_email_format_is_not_constrained() {
        let payload: UserPayload = serde_json::from_str(r#"{"correo":"not an email"}"#).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_over_length_field_fails_validation() {
        let payload = UserPayload {
            nombre: None,
            correo: Some("x".repeat(256)),
        };
        let err = payload.validate().unwrap_err();
        assert!(err.field_errors().contains_key("correo"));
    }
}
