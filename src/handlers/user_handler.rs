//! User CRUD handlers.
//!
//! Each handler performs exactly one store round trip through the service
//! layer and serializes the result as JSON. Requests are stateless and
//! independent; concurrent writes to the same id are last-write-wins.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};
use validator::Validate;

use crate::constants::{ERR_USER_NOT_FOUND, MSG_USER_DELETED};
use crate::errors::ApiError;
use crate::models::{MessageResponse, UserPayload};
use crate::services::UserService;
use crate::utils::mask_email;

fn validate_payload(payload: &UserPayload) -> Result<(), ApiError> {
    payload.validate().map_err(|e| {
        let errors: Vec<String> = e
            .field_errors()
            .iter()
            .flat_map(|(_, errs)| {
                errs.iter()
                    .map(|e| e.message.clone().unwrap_or_default().to_string())
            })
            .collect();
        warn!("Validation failed for user payload: {:?}", errors);
        ApiError::ValidationError(errors)
    })
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = [crate::models::User]),
        (status = 500, description = "Store failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    debug!("Fetching all users");
    let users = user_service.get_all_users().await?;

    info!("Fetched {} users", users.len());
    Ok(HttpResponse::Ok().json(users))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = crate::models::User),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let user = user_service.get_user_by_id(user_id).await?.ok_or_else(|| {
        warn!("User not found with id: {}", user_id);
        ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
    })?;

    info!("Successfully fetched user: {}", user_id);
    Ok(HttpResponse::Ok().json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = crate::models::User),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    validate_payload(&body)?;

    if let Some(correo) = body.correo.as_deref() {
        debug!("Creating user with correo: {}", mask_email(correo));
    }

    let user = user_service.create_user(body.into_inner()).await?;

    info!("Successfully created user: {}", user.id);
    Ok(HttpResponse::Created().json(user))
}

/// Update a user
///
/// Both fields are overwritten unconditionally; omitting one clears it.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = crate::models::User),
        (status = 400, description = "Validation error", body = crate::errors::ErrorResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<i32>,
    body: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    validate_payload(&body)?;

    info!("Updating user with id: {}", user_id);
    let user = user_service
        .update_user(user_id, body.into_inner())
        .await?
        .ok_or_else(|| {
            warn!("User not found for update with id: {}", user_id);
            ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
        })?;

    info!("Successfully updated user: {}", user_id);
    Ok(HttpResponse::Ok().json(user))
}

/// Delete a user
///
/// Idempotent: deleting an id that does not exist still acknowledges.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = crate::models::MessageResponse),
        (status = 500, description = "Store failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    info!("Deleting user with id: {}", user_id);
    user_service.delete_user(user_id).await?;

    info!("Successfully deleted user: {}", user_id);
    Ok(HttpResponse::Ok().json(MessageResponse::new(MSG_USER_DELETED)))
}
