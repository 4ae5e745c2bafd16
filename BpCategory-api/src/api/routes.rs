use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{debug, error, instrument};

use crate::api::error::ApiError;
use crate::api::handlers::{classify, form, health};
use crate::api::security::configure_security;
use crate::config::ServerConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(config: &ServerConfig) -> Router {
    debug!("Creating application router");

    let health_service = health::create_health_service(config.environment.clone());

    // HTML calculator
    let page_routes = Router::new()
        .route("/", get(form::show_form))
        .route("/calculate", post(form::calculate));

    debug!("Page routes configured");

    // JSON API
    let api_routes = Router::new()
        .route("/api/classify", get(classify::classify_blood_pressure));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service));

    let app = Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .merge(public_routes);

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    let app = app
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http());

    // Apply security headers outermost so every response carries them
    let app = configure_security(app);
    debug!("Security configuration applied");

    health::initialize_server_start_time();

    app
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}

/// Fallback for paths no route matches
#[instrument]
async fn not_found() -> ApiError {
    debug!("No route matched");
    ApiError::NotFound
}

/// Fallback for known paths requested with an unsupported method
#[instrument]
async fn method_not_allowed() -> ApiError {
    debug!("Method not allowed on matched route");
    ApiError::MethodNotAllowed
}

/// Turn a panicking handler into a plain 500 without leaking the panic payload
pub(crate) fn handle_panic(_payload: Box<dyn Any + Send + 'static>) -> Response {
    error!("Request handler panicked");
    ApiError::Internal.into_response()
}
