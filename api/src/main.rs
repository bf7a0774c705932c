use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use ch_api::app::create_app;
use ch_api::routes::tailleur::AppState;
use ch_core::services::credit::{ConversionRuleRegistry, CreditService};
use ch_core::services::post::{PostService, PostServiceConfig};
use ch_core::services::status::StatusService;
use ch_infra::{
    create_pool, MySqlAccountRepository, MySqlConversionRuleRepository, MySqlPostRepository,
    MySqlStatusRepository, MySqlTailorRepository,
};
use ch_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting CoutureHub API Server");

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Database pool and repositories
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let accounts = Arc::new(MySqlAccountRepository::new(pool.clone()));
    let tailors = Arc::new(MySqlTailorRepository::new(pool.clone()));
    let posts = Arc::new(MySqlPostRepository::new(pool.clone()));
    let statuses = Arc::new(MySqlStatusRepository::new(pool.clone()));
    let rules = Arc::new(MySqlConversionRuleRepository::new(pool));

    // Services
    let registry = Arc::new(ConversionRuleRegistry::new(rules));
    let credit_service = Arc::new(CreditService::new(Arc::clone(&accounts), registry));
    let post_service = Arc::new(PostService::new(
        Arc::clone(&accounts),
        Arc::clone(&tailors),
        posts,
        Arc::clone(&credit_service),
        PostServiceConfig::default(),
    ));
    let status_service = Arc::new(StatusService::new(tailors, statuses));

    let app_state = web::Data::new(AppState {
        post_service,
        credit_service,
        status_service,
    });

    let jwt = config.jwt.clone();
    let workers = config.server.workers;

    let mut server = HttpServer::new(move || create_app(app_state.clone(), jwt.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }
    server.bind(&bind_address)?.run().await
}
