use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One row of the `users` table.
///
/// Wire field names (`nombre`, `correo`) are part of the public API contract
/// inherited from the original service. Absent fields serialize as JSON
/// `null`, matching the row-as-is behavior clients already depend on.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct User {
    /// Surrogate primary key, auto-assigned, never reused
    #[schema(example = 1)]
    pub id: i32,
    /// Display name, free-form
    #[schema(example = "Ana")]
    pub nombre: Option<String>,
    /// Email address, free-form (no format or uniqueness constraint)
    #[schema(example = "ana@example.com")]
    pub correo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_all_fields() {
        let user = User {
            id: 7,
            nombre: Some("Ana".to_string()),
            correo: Some("ana@example.com".to_string()),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "nombre": "Ana", "correo": "ana@example.com" })
        );
    }

    #[test]
    fn test_user_serializes_absent_fields_as_null() {
        let user = User {
            id: 3,
            nombre: None,
            correo: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 3, "nombre": null, "correo": null })
        );
    }
}
