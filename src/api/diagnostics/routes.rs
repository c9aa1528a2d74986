// Diagnostic route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router with health endpoints and one endpoint per error category
pub fn diagnostics_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(handler::hello_handler))
        .route("/status", get(handler::status_handler))
        .route("/errors/validation", post(handler::validation_test_handler))
        .route("/errors/unauthorized", get(handler::unauthorized_test_handler))
        .route("/errors/forbidden", get(handler::forbidden_test_handler))
        .route("/errors/not-found", get(handler::not_found_test_handler))
        .route("/errors/response", get(handler::response_test_handler))
        .route("/errors/server", get(handler::server_error_test_handler))
        .route("/errors/timeout", get(handler::timeout_test_handler))
}
