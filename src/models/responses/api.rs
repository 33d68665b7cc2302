//! Generic API response models.

use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgment body for operations that return no record
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Confirmation message
    #[schema(example = "Usuario eliminado")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}
