//! User service for CRUD operations over the users table.

use std::sync::Arc;

use log::debug;
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::models::{User, UserPayload};
use crate::repositories::UserRepository;

pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(pool)),
        }
    }

    /// Create a new UserService with a shared repository (for dependency injection).
    #[allow(dead_code)]
    pub fn with_repository(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        self.repository.find_all().await
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        self.repository.find_by_id(id).await
    }

    pub async fn create_user(&self, payload: UserPayload) -> Result<User, ApiError> {
        debug!("Service: Creating user");
        self.repository
            .insert(payload.nombre.as_deref(), payload.correo.as_deref())
            .await
    }

    /// Replace both fields of an existing user. Fields omitted from the
    /// payload are written as NULL, not preserved.
    pub async fn update_user(
        &self,
        id: i32,
        payload: UserPayload,
    ) -> Result<Option<User>, ApiError> {
        self.repository
            .update(id, payload.nombre.as_deref(), payload.correo.as_deref())
            .await
    }

    pub async fn delete_user(&self, id: i32) -> Result<(), ApiError> {
        self.repository.delete(id).await
    }
}
