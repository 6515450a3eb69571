use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use prayer_times::DiyanetClient;
use regions::RegionCatalog;
use shared_kernel::configuration::config;
use tracing_actix_web::TracingLogger;

use crate::app_container::Application;
use crate::settings::Settings;

mod app_container;
mod errors;
mod routes;
mod settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("prayer_times_http_server");
    let result = start().await;
    shared_kernel::tracing::shutdown_global_tracer_provider();
    result
}

async fn start() -> anyhow::Result<()> {
    let settings = config::<Settings>()?;

    // The server must not start without a catalog.
    let catalog = RegionCatalog::from_path(&settings.regions.data_file)
        .context("Failed to load the region catalog")?;
    let prayer_times_source = DiyanetClient::new(&settings.upstream)?;
    let application = web::Data::new(Application::new(catalog, Arc::new(prayer_times_source)));

    let address = (settings.application.host.clone(), settings.application.port);
    tracing::info!(host = %address.0, port = address.1, "Starting http server");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(application.clone())
            .configure(routes::config)
    })
    .bind(address)?
    .run()
    .await
    .context("Server failed to run")
}
