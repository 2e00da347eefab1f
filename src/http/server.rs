use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::ErrorHandlers;
use actix_web::{web, HttpServer};
use error_stack::{Result, ResultExt};
use thiserror::Error;
use tracing_actix_web::TracingLogger;

use super::controllers;
use super::util::{handle_actix_web_error, QuieterRootSpanBuilder};
use crate::{config, types, App};

#[derive(Debug, Error)]
#[error("Failed to start the HTTP server")]
pub struct StartServerError;

/// Serves the HTTP surface until the process is asked to stop.
pub async fn run(config: config::Server) -> Result<(), StartServerError> {
    let app = App::new(config);
    let addr = (app.config.ip, app.config.port);
    let workers = app.config.workers.get();

    tracing::info!(
        "Starting {} v{} on {}:{}",
        crate::SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
        addr.0,
        addr.1,
    );

    let data = web::Data::new(app);
    HttpServer::new(move || scaffold(data.clone()))
        .workers(workers)
        .bind(addr)
        .change_context(StartServerError)
        .attach_printable("could not bind to the configured address")?
        .run()
        .await
        .change_context(StartServerError)
}

/// Builds the per-worker actix app: state, payload configs, the
/// middleware stack and the route table. Tests drive the exact same
/// stack through [`actix_web::test::init_service`].
pub(crate) fn scaffold(
    data: web::Data<App>,
) -> actix_web::App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    actix_web::App::new()
        .app_data(data)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(TracingLogger::<QuieterRootSpanBuilder>::new())
        .wrap(ErrorHandlers::new().default_handler(handle_actix_web_error))
        .wrap_fn(|req, srv| {
            if let Some(app) = req.app_data::<web::Data<App>>() {
                app.record_request();
            }
            srv.call(req)
        })
        .configure(controllers::configure)
}

// Malformed or wrong-typed write bodies surface as the same wire
// error as a failed form validation.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        super::Error::from(validator::ValidateError::message(err.to_string())).into()
    })
}

// A non-numeric or zero id can never match a record, so it answers
// the same way as an id that was never issued.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|_err, _req| {
        #[derive(Debug, thiserror::Error)]
        #[error("Request path carries an id that cannot exist")]
        struct InvalidPathId;
        super::Error::from_context(types::Error::NotFound, InvalidPathId).into()
    })
}
