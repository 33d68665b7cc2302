//! Success message constants used throughout the application.

// User management messages
//
// The delete acknowledgment is part of the public API contract and is kept
// verbatim from the original service, Spanish wording included.
pub const MSG_USER_DELETED: &str = "Usuario eliminado";

// Health check messages
pub const MSG_SERVER_RUNNING: &str = "Server is running";
