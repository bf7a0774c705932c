//! Application factory
//!
//! Assembles the Actix application: middleware, the tailor scope behind the
//! JWT role gate, and the health endpoint.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::tailleur::{
    buy_credit::buy_credit, create_post::create_post, create_status::create_status,
    delete_post::delete_post, update_post::update_post, AppState,
};

use ch_core::repositories::{
    AccountRepository, ConversionRuleRepository, PostRepository, StatusRepository,
    TailorRepository,
};
use ch_shared::config::JwtConfig;
use ch_shared::types::response::Envelope;

/// Create and configure the application with all dependencies
pub fn create_app<A, C, T, P, S>(
    app_state: web::Data<AppState<A, C, T, P, S>>,
    jwt: JwtConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    C: ConversionRuleRepository + 'static,
    T: TailorRepository + 'static,
    P: PostRepository + 'static,
    S: StatusRepository + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware (CORS before logging)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/tailleur")
                        .route("/status", web::post().to(create_status::<A, C, T, P, S>))
                        .route("/posts", web::post().to(create_post::<A, C, T, P, S>))
                        .route(
                            "/posts/{post_id}",
                            web::put().to(update_post::<A, C, T, P, S>),
                        )
                        .route(
                            "/posts/{post_id}",
                            web::delete().to(delete_post::<A, C, T, P, S>),
                        )
                        .route("/achetercredit", web::post().to(buy_credit::<A, C, T, P, S>))
                        // Applies to every route of the scope
                        .wrap(JwtAuth::from_config(&jwt).tailleur_only()),
                )
                .route("/", web::get().to(api_documentation)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "couture-hub-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "CoutureHub API v1",
        "endpoints": {
            "health": "/health",
            "tailleur": {
                "create_status": {
                    "path": "/api/v1/tailleur/status",
                    "method": "POST",
                    "description": "Publish an ephemeral status (media required)"
                },
                "create_post": {
                    "path": "/api/v1/tailleur/posts",
                    "method": "POST",
                    "description": "Create a post; first of the month free, 2 credits after",
                    "request_body": {
                        "title": "string",
                        "content": "string",
                        "files": "string (uploaded media reference)",
                        "useCredit": "boolean (optional)"
                    }
                },
                "update_post": {
                    "path": "/api/v1/tailleur/posts/{post_id}",
                    "method": "PUT",
                    "description": "Edit title/content of an owned post"
                },
                "delete_post": {
                    "path": "/api/v1/tailleur/posts/{post_id}",
                    "method": "DELETE",
                    "description": "Delete an owned post"
                },
                "buy_credit": {
                    "path": "/api/v1/tailleur/achetercredit",
                    "method": "POST",
                    "description": "Convert a paid amount into credit",
                    "request_body": { "montant": "number" }
                }
            }
        }
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(Envelope::ko("The requested resource was not found"))
}
