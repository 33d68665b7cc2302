use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::models::{HealthResponse, MessageResponse, User, UserPayload};

/// OpenAPI documentation for the users API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "0.1.0",
        description = "A minimal REST API exposing CRUD operations over a PostgreSQL users table."
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User CRUD endpoints")
    ),
    paths(
        crate::routes::health_check,
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user
    ),
    components(
        schemas(
            User,
            UserPayload,
            MessageResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
