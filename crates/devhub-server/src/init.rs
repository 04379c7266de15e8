//! Server bootstrap

use std::path::Path;

use devhub_infrastructure::logging::init_logging;
use devhub_infrastructure::{AppContext, ConfigLoader, init_app};
use rocket::config::LogLevel;
use rocket::{Build, Rocket};
use tracing::info;

use crate::catchers::json_catchers;
use crate::constants::API_BASE;
use crate::cors::Cors;
use crate::routes::api_routes;

/// Assemble the Rocket instance around `context`
///
/// Rocket's own logger is silenced; request logging goes through `tracing`.
pub fn build_rocket(context: AppContext) -> Rocket<Build> {
    let server = &context.config.server;
    let figment = rocket::Config::figment()
        .merge(("address", server.host.clone()))
        .merge(("port", server.port))
        .merge(("log_level", LogLevel::Off));
    let cors = Cors::new(server.cors.clone());

    rocket::custom(figment)
        .manage(context)
        .mount(API_BASE, api_routes())
        .register("/", json_catchers())
        .attach(cors)
}

/// Load configuration, initialize logging and serve until shutdown
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        store = %config.store.provider,
        "Starting DevHub server"
    );

    let context = init_app(config)?;
    build_rocket(context).launch().await?;

    info!("Server stopped");
    Ok(())
}
