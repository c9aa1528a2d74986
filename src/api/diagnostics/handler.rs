// Diagnostic handlers exercising every envelope path

use axum::{extract::State, http::StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use validator::Validate;

use crate::config::state::AppState;
use crate::utils::{
    error_handler::ApiError,
    extractors::{ValidatedJson, ValidatedQuery},
    response_handler::ApiResponse,
};

/// Basic hello endpoint with version information
#[instrument(skip_all)]
pub async fn hello_handler() -> ApiResponse {
    info!("Hello endpoint called");

    ApiResponse::ok(json!({ "version": env!("CARGO_PKG_VERSION") }))
        .message("Service started successfully")
}

/// Returns API status and health information
#[instrument(skip_all)]
pub async fn status_handler(State(state): State<AppState>) -> ApiResponse {
    info!("Status endpoint called");

    ApiResponse::ok(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "status": "healthy",
        "environment": state.environment.environment.as_ref(),
    }))
    .message("API is running successfully")
}

#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(required, email)]
    pub email: Option<String>,
    #[validate(length(max = 100, message = "The name may not be greater than 100 characters."))]
    pub name: Option<String>,
}

/// Validates the body and echoes it back; an invalid body yields 422
#[instrument(skip_all)]
pub async fn validation_test_handler(
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> ApiResponse {
    ApiResponse::ok(json!({ "email": request.email, "name": request.name }))
        .message("Validation passed")
}

#[instrument(skip_all)]
pub async fn unauthorized_test_handler() -> Result<ApiResponse, ApiError> {
    info!("Testing deliberate 401 error");
    Err(ApiError::Unauthenticated("Unauthenticated.".to_string()))
}

#[instrument(skip_all)]
pub async fn forbidden_test_handler() -> Result<ApiResponse, ApiError> {
    info!("Testing deliberate 403 error");
    Err(ApiError::Forbidden("This action is unauthorized.".to_string()))
}

#[instrument(skip_all)]
pub async fn not_found_test_handler() -> Result<ApiResponse, ApiError> {
    info!("Testing deliberate 404 error");
    Err(ApiError::NotFound("Deliberate not found for testing purposes".to_string()))
}

#[instrument(skip_all)]
pub async fn response_test_handler() -> Result<ApiResponse, ApiError> {
    info!("Testing deliberate pre-built response error");
    Err(ApiError::HttpResponse {
        status: StatusCode::CONFLICT,
        body: "Deliberate pre-built response for testing purposes".to_string(),
    })
}

/// Sleeps past the configured request timeout so the timeout layer answers 408
#[instrument(skip_all)]
pub async fn timeout_test_handler(State(state): State<AppState>) -> ApiResponse {
    let timeout_seconds: u64 = state.environment.default_timeout_seconds;
    info!("Testing timeout: sleeping for {} seconds", timeout_seconds + 1);

    tokio::time::sleep(std::time::Duration::from_secs(timeout_seconds + 1)).await;

    ApiResponse::ok(json!({ "slept_seconds": timeout_seconds + 1 }))
        .message("Timeout was not triggered")
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ServerErrorQuery {
    pub message: Option<String>,
}

/// Raises an unclassified error carrying `?message=` (empty when absent)
#[instrument(skip_all)]
pub async fn server_error_test_handler(
    ValidatedQuery(query): ValidatedQuery<ServerErrorQuery>,
) -> Result<ApiResponse, ApiError> {
    info!("Testing deliberate 500 error");
    Err(ApiError::server_message(query.message.unwrap_or_default()))
}
