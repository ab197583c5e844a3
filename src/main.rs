//! Open-Source Showcase server - Main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, web};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use showcase_lib::api;
use showcase_lib::config::{Config, GITHUB_TOKEN_HEADER};
use showcase_lib::middleware::RequestLogger;
use showcase_lib::services::{ContributionAggregator, GitHubClient};

/// Perform health check (for Docker healthcheck).
fn health_check() -> bool {
    Config::from_env().is_ok()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Check for --health-check flag (used by Docker HEALTHCHECK)
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--health-check") {
        dotenvy::dotenv().ok();
        std::process::exit(if health_check() { 0 } else { 1 });
    }

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, SHOWCASE_GITHUB_API_URL must use https");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Open-Source Showcase Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    if config.github.token.is_none() {
        warn!("GITHUB_TOKEN is not set; unauthenticated requests share GitHub's low rate limit");
    }

    let client = match GitHubClient::new(&config.github) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize GitHub client: {}", e);
            std::process::exit(1);
        }
    };
    let aggregator = web::Data::new(ContributionAggregator::new(client));

    let bind_address = config.bind_address();
    let static_dir = config.static_dir.clone();
    let allowed_origins = config.allowed_origins.clone();
    let is_development = config.is_development();

    if let Some(ref dir) = static_dir {
        info!("Static file serving enabled from {:?}", dir);
    }
    info!("CORS allowed origins: {:?}", allowed_origins);

    let worker_count = if is_development {
        info!(
            "Starting server at http://{} (4 workers - development mode)",
            bind_address
        );
        4
    } else {
        let cpus = num_cpus::get();
        info!(
            "Starting server at http://{} ({} workers)",
            bind_address, cpus
        );
        cpus
    };

    let server = HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .allowed_header(GITHUB_TOKEN_HEADER)
            .max_age(3600);

        App::new()
            // CORS must wrap before other middleware
            .wrap(cors)
            .wrap(RequestLogger)
            .app_data(aggregator.clone())
            .service(
                web::scope("/api/v1")
                    .configure(api::configure_health_routes)
                    .configure(api::configure_user_routes),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
            )
            // Serves SHOWCASE_STATIC_DIR when set; registers the default service
            .configure(api::configure_frontend(static_dir.clone()))
    });

    server
        .workers(worker_count)
        .bind(&bind_address)?
        .run()
        .await
}
