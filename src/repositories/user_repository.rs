//! User repository for all PostgreSQL operations related to users.
//!
//! This repository encapsulates all database access logic for the users table,
//! providing a clean interface for the service layer. Every method issues
//! exactly one parameterized statement against the pool.

use log::debug;
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::models::User;

/// Repository for user-related database operations.
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch every user row. Order is the store's scan order and is not
    /// guaranteed.
    pub async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        debug!("Repository: Fetching all users");
        let users = sqlx::query_as::<_, User>("SELECT id, nombre, correo FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by id: {}", id);
        let user =
            sqlx::query_as::<_, User>("SELECT id, nombre, correo FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(user)
    }

    /// Insert a new user and return the row with its assigned id.
    pub async fn insert(
        &self,
        nombre: Option<&str>,
        correo: Option<&str>,
    ) -> Result<User, ApiError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (nombre, correo) VALUES ($1, $2) RETURNING id, nombre, correo",
        )
        .bind(nombre)
        .bind(correo)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    /// Overwrite both columns of an existing user. Returns `None` when no row
    /// matches the id.
    pub async fn update(
        &self,
        id: i32,
        nombre: Option<&str>,
        correo: Option<&str>,
    ) -> Result<Option<User>, ApiError> {
        debug!("Repository: Updating user with id: {}", id);
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET nombre = $1, correo = $2 WHERE id = $3 RETURNING id, nombre, correo",
        )
        .bind(nombre)
        .bind(correo)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Delete a user by id. Deleting an id that does not exist is not an
    /// error; the operation is idempotent.
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        debug!("Repository: Deleting user with id: {}", id);
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
