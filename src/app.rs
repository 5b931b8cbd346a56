use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{debug, info};

use crate::{
    config::{Config, Environment},
    db::Database,
    errors::AppError,
    middleware::RequestId,
    routes, services,
};

// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

// Setup logging with custom format and configuration
fn setup_logging(config: &Config) -> Result<(), AppError> {
    let log_level = match config.app.environment {
        Environment::Development => config.app.log_level.clone(),
        Environment::Testing => "debug,actix_web=info".to_string(),
        Environment::Production => "info,actix_web=warn".to_string(),
    };

    let env = Env::default()
        .filter_or("RUST_LOG", log_level)
        .write_style_or("RUST_LOG_STYLE", "always");

    env_logger::try_init_from_env(env)
        .map_err(|e| AppError::Logger(format!("Failed to initialize logger: {}", e)))
}

pub async fn server() -> AppResult<()> {
    let config = Config::load()?;

    setup_logging(&config)?;

    info!("Starting {} v{}", config.app.name, config.app.version);
    info!("Environment: {:?}", config.app.environment);

    if config.app.environment == Environment::Development {
        debug!("Debug logging enabled");
        debug!("Full configuration: {:?}", config);
    }

    // The store is opened once here and closed once after the server stops
    let db = Database::connect(&config.db).await?;

    let service = services::register(&db, &config.shortener);

    let enable_debug_logging = config.app.environment != Environment::Production;

    let log_format = if enable_debug_logging {
        "%a \"%r\" %s %b %T \"%{User-Agent}i\" %{X-Request-ID}o"
    } else {
        "%a \"%r\" %s %b %T"
    };

    info!(
        "Server running on http://{}:{} with {} workers",
        config.server.host, config.server.port, config.server.workers
    );

    let app_config = config.clone();

    let result = HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(web::Data::new(app_config.clone()))
            .wrap(RequestId::new(enable_debug_logging))
            .wrap(Logger::new(log_format))
            .configure(routes::configure_routes)
    })
    .workers(config.server.workers)
    .bind((config.server.host.to_string(), config.server.port));

    let served = match result {
        Ok(server) => server.run().await,
        Err(e) => Err(e),
    };

    db.shutdown().await;

    served.map_err(AppError::from)
}
