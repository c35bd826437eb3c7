use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::JsonPayloadError,
    web, App, HttpRequest, HttpServer,
};
use std::io;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::RequestIdMiddleware;
use crate::state::AppState;

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let err = AppError::BadRequest(format!("Invalid JSON body: {err}"));
    handlers::log_failure(req, &err);
    err.into()
}

/// Bodies are parsed as JSON whatever their `Content-Type`, including none.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(json_error_handler)
}

/// Route table.
///
/// Each resource carries the not-found fallback so that an unsupported
/// method on a known path answers 404 rather than 405.
pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource("/")
                .route(web::get().to(handlers::root::handler))
                .default_service(web::to(handlers::not_found)),
        )
        .service(
            web::resource("/todos")
                .route(web::get().to(handlers::todos::list))
                .route(web::post().to(handlers::todos::create))
                .default_service(web::to(handlers::not_found)),
        )
        .service(
            web::resource("/todos/{id}")
                .route(web::get().to(handlers::todos::get))
                .route(web::put().to(handlers::todos::update))
                .route(web::delete().to(handlers::todos::delete))
                .default_service(web::to(handlers::not_found)),
        )
        .default_service(web::to(handlers::not_found));
}

/// The full application (state, middleware and routes) as served by the
/// binary and exercised by the integration tests.
pub fn build_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(RequestIdMiddleware)
        .wrap(Cors::permissive())
        .configure(app_config)
}

pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    let state = web::Data::new(AppState::new());

    let mut server = HttpServer::new(move || build_app(state.clone()));
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server.bind(config.bind_addr())?.run();
    log::info!("Server is running on http://{}", config.bind_addr());

    server.await
}
