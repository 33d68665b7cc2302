//! User-facing response models.

pub mod api;

pub use api::*;
