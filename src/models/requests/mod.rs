//! User-facing request models.

pub mod user;

pub use user::*;
