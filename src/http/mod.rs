use actix_web::{web, HttpServer};
use error_stack::{Result, ResultExt};
use tracing_actix_web::TracingLogger;

use crate::{config, App};

pub mod controllers;
pub mod error;
pub mod util;

pub use error::Error;

#[derive(Debug, thiserror::Error)]
#[error("Failed to start HTTP server")]
pub struct StartServerError;

/// Builds the [`App`] state and serves the API until shutdown.
pub async fn run(config: config::Server) -> Result<(), StartServerError> {
    let app = App::new(config).await.change_context(StartServerError)?;
    let addr = (app.config.ip, app.config.port);
    let workers = app.config.workers;

    tracing::info!("listening on http://{}:{}", addr.0, addr.1);

    HttpServer::new(move || {
        actix_web::App::new()
            .app_data(web::Data::new(app.clone()))
            .app_data(util::json_config())
            .app_data(util::path_config())
            .wrap(TracingLogger::default())
            .configure(controllers::configure)
            .default_service(web::route().to(controllers::meta::not_found))
    })
    .workers(workers)
    .bind(addr)
    .change_context(StartServerError)
    .attach_printable("could not bind to the configured address")?
    .run()
    .await
    .change_context(StartServerError)
}
