//! Application constants module.
//!
//! Centralizes the constant strings used throughout the application: success
//! messages and error messages returned to clients.

pub mod errors;
pub mod messages;

pub use errors::*;
pub use messages::*;
