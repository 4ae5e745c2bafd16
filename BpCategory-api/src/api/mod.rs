pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod security;

#[cfg(test)]
mod routes_tests;

use axum::Router;

use crate::config::ServerConfig;

/// Create the application router
pub fn create_application(config: &ServerConfig) -> Router {
    routes::create_app(config)
}
