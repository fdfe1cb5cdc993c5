use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware, error};
use blood_locator::config::{LoggingSettings, Settings};
use blood_locator::core::Matcher;
use blood_locator::models::ErrorResponse;
use blood_locator::routes::{self, search::AppState};
use blood_locator::services::CandidateDirectory;
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    ErrorResponse::bad_request("invalid_query", format!("Invalid query: {}", err)).into()
}

fn init_tracing(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_tracing(&settings.logging);

    info!("Starting Blood Locator search service...");

    let directory = CandidateDirectory::from_path(&settings.directory.candidates_path).map_err(|e| {
        error!(
            "Failed to load candidate directory from {}: {}",
            settings.directory.candidates_path, e
        );
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    if directory.is_empty() {
        tracing::warn!("Candidate directory is empty, every search will return no results");
    }

    let matcher = Matcher::new(settings.matching.default_limit, settings.matching.max_limit);

    info!("Matcher initialized: {:?}", matcher);

    let app_state = AppState {
        directory: Arc::new(directory),
        matcher,
        default_radius_km: settings.matching.default_radius_km,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
