// Error taxonomy for HTTP handlers and the classifier turning it into envelopes
// Also hosts the global handler for tower layer errors and the exception reporting middleware

use std::{
    any::type_name,
    backtrace::Backtrace,
    error::Error,
    fmt,
    panic::Location,
};

use axum::{
    body::Body,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{Method, Request, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
    BoxError,
};
use http_body_util::LengthLimitError;
use serde_json::json;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::error;
use validator::ValidationErrors;

use crate::utils::{
    message_bag::MessageBag,
    response_handler::{ApiResponse, ErrorDetail},
    utils::full_url,
};

/// Every failure a handler can surface. Rendering is an ordered match:
/// the domain-specific categories come before the server error fallback.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Field-level validation failure
    #[error("Validation failed")]
    Validation(MessageBag),

    /// Missing or invalid credentials
    #[error("{0}")]
    Unauthenticated(String),

    /// Credentials present but rejected by an authorization rule
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("{0}")]
    Forbidden(String),

    /// Request body over the configured limit
    #[error("Request body too large")]
    PayloadTooLarge,

    /// A response produced upstream (e.g. an extractor rejection) that aborted the request
    #[error("HTTP response error ({status}): {body}")]
    HttpResponse { status: StatusCode, body: String },

    /// Anything else
    #[error("{0}")]
    Server(Box<ServerError>),
}

/// An unclassified error, with where it was raised
#[derive(Debug)]
pub struct ServerError {
    message: String,
    kind: &'static str,
    location: &'static Location<'static>,
    backtrace: Backtrace,
}

impl ServerError {
    #[track_caller]
    fn new(message: String, kind: &'static str) -> Self {
        Self {
            message,
            kind,
            location: Location::caller(),
            backtrace: Backtrace::capture(),
        }
    }

    fn report(&self) -> ExceptionReport {
        ExceptionReport {
            message: self.message.clone(),
            exception: self.kind,
            file: self.location.file(),
            line: self.location.line(),
            trace: self.backtrace.to_string(),
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// What gets logged for a server error, carried in the response extensions
/// until the middleware that knows the request picks it up
#[derive(Debug, Clone)]
pub struct ExceptionReport {
    pub message: String,
    pub exception: &'static str,
    pub file: &'static str,
    pub line: u32,
    pub trace: String,
}

impl ApiError {
    /// Wraps any error as an unclassified server error, recording its type and the caller location
    #[track_caller]
    pub fn server<E: fmt::Display>(err: E) -> Self {
        Self::Server(Box::new(ServerError::new(err.to_string(), type_name::<E>())))
    }

    #[track_caller]
    pub fn server_message(message: impl Into<String>) -> Self {
        Self::Server(Box::new(ServerError::new(message.into(), type_name::<Self>())))
    }

    /// Single-field validation failure
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(MessageBag::with(field, message))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthenticated(_) | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::HttpResponse { .. } => StatusCode::BAD_REQUEST,
            Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its envelope
    pub fn render(self) -> ApiResponse {
        match self {
            Self::Validation(bag) => ApiResponse::unprocessable_entity()
                .message("Validation failed")
                .errors(bag),

            Self::Unauthenticated(message) | Self::Unauthorized(message) => {
                ApiResponse::unauthorized().message(message)
            }

            Self::NotFound(message) => ApiResponse::not_found()
                .message("Resource not found")
                .errors(message),

            Self::MethodNotAllowed(message) => {
                ApiResponse::error(message, StatusCode::METHOD_NOT_ALLOWED, None)
            }

            Self::Forbidden(message) => ApiResponse::forbidden().message(message),

            Self::PayloadTooLarge => {
                ApiResponse::error("Request body too large", StatusCode::PAYLOAD_TOO_LARGE, None)
            }

            Self::HttpResponse { status, body } => ApiResponse::error(
                "Error",
                StatusCode::BAD_REQUEST,
                Some(ErrorDetail::Raw(json!({ "status": status.as_u16(), "body": body }))),
            ),

            Self::Server(err) => {
                let message: String = if err.message.is_empty() {
                    "Server error".to_string()
                } else {
                    err.message.clone()
                };

                ApiResponse::server_error()
                    .message(message)
                    .with_report(err.report())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.render().into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    #[track_caller]
    fn from(err: anyhow::Error) -> Self {
        if let Some(sqlx::Error::RowNotFound) = err.downcast_ref::<sqlx::Error>() {
            return Self::NotFound("No query results for the requested record".to_string());
        }

        let kind: &'static str = root_cause_kind(&err);
        Self::Server(Box::new(ServerError::new(err.to_string(), kind)))
    }
}

/// Type name of the innermost error in an anyhow chain, for the types this crate produces
fn root_cause_kind(err: &anyhow::Error) -> &'static str {
    let root: &(dyn Error + 'static) = err.root_cause();

    if root.is::<sqlx::Error>() {
        type_name::<sqlx::Error>()
    } else if root.is::<serde_json::Error>() {
        type_name::<serde_json::Error>()
    } else if root.is::<std::io::Error>() {
        type_name::<std::io::Error>()
    } else {
        type_name::<anyhow::Error>()
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::server(err)
    }
}

impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound("No query results for the requested record".to_string()),
            other => Self::server(other),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(MessageBag::from(&errors))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge;
        }

        match &rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => Self::invalid("body", rejection.body_text()),
            _ => Self::HttpResponse {
                status: rejection.status(),
                body: rejection.body_text(),
            },
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::invalid("query", rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::NotFound(rejection.body_text())
    }
}

/// Fallback for unmatched routes
pub async fn fallback_handler(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("The route {} could not be found.", uri.path()))
}

/// Fallback for a matched path requested with an unsupported method
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!(
        "The {} method is not supported for route {}.",
        method,
        uri.path()
    ))
}

/// Maps errors raised by tower layers (timeouts, body limits) to envelopes
pub async fn handle_global_error(err: BoxError) -> ApiResponse {
    // 413 if the body was too large
    if err.is::<LengthLimitError>() || find_cause::<LengthLimitError>(&*err).is_some() {
        return ApiError::PayloadTooLarge.render();
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return ApiResponse::error("Request timeout", StatusCode::REQUEST_TIMEOUT, None);
    }

    // Otherwise, 500
    ApiError::server_message(err.to_string()).render()
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}

/// Middleware logging server errors together with the request that caused them
pub async fn report_exceptions(req: Request<Body>, next: Next) -> Response {
    let method: Method = req.method().clone();
    let url: String = full_url(&req);

    let response: Response = next.run(req).await;

    if let Some(report) = response.extensions().get::<ExceptionReport>() {
        log_exception(report, &method, &url);
    }

    response
}

fn log_exception(report: &ExceptionReport, method: &Method, url: &str) {
    error!(
        exception = report.exception,
        file = report.file,
        line = report.line,
        trace = %report.trace,
        url = %url,
        method = %method,
        "{}",
        report.message
    );
}
