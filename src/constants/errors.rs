//! Error message constants used throughout the application.

pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_DATABASE: &str = "Database operation failed";
pub const ERR_VALIDATION: &str = "Validation failed";
