use actix_web::{web, HttpResponse};

use crate::constants::MSG_SERVER_RUNNING;
use crate::handlers;
use crate::models::HealthResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // User CRUD routes
            .service(
                web::scope("/users")
                    // List all users
                    .route("", web::get().to(handlers::get_users))
                    // Create a new user
                    .route("", web::post().to(handlers::create_user))
                    // Get specific user by ID
                    .route("/{id}", web::get().to(handlers::get_user))
                    // Overwrite user fields
                    .route("/{id}", web::put().to(handlers::update_user))
                    // Delete user
                    .route("/{id}", web::delete().to(handlers::delete_user)),
            ),
    );
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::*;

    #[actix_web::test]
    async fn test_health_check_responds_ok() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], "Server is running");
    }
}
