// Unified response system for consistent API responses
// Every handler answers with an ApiResponse, serialized as the standard Envelope

use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::utils::{
    error_handler::ExceptionReport,
    message_bag::MessageBag,
    pagination::{LengthAwarePaginator, PaginationMeta},
    utils::to_two_space_indented_json,
};

/// Standard JSON envelope for all API endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl Envelope {
    fn new(status: StatusCode, message: String) -> Self {
        Self {
            success: status.as_u16() < 400,
            message,
            data: None,
            errors: None,
        }
    }
}

/// Payload shapes accepted by the success path
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    /// Passed through unchanged
    Plain(Value),
    /// A single resolved resource
    Resource(Value),
    /// A list of resources, paginated when `pagination` is present
    Collection {
        items: Vec<Value>,
        pagination: Option<PaginationMeta>,
    },
}

impl ResponseData {
    pub fn resource<T: Serialize>(resource: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::Resource(serde_json::to_value(resource)?))
    }

    pub fn collection<T: Serialize>(items: &[T]) -> Result<Self, serde_json::Error> {
        Ok(Self::Collection {
            items: to_values(items)?,
            pagination: None,
        })
    }

    pub fn paginated<T: Serialize>(page: &LengthAwarePaginator<T>) -> Result<Self, serde_json::Error> {
        Ok(Self::Collection {
            items: to_values(page.items())?,
            pagination: Some(page.meta()),
        })
    }
}

impl From<Value> for ResponseData {
    fn from(value: Value) -> Self {
        Self::Plain(value)
    }
}

fn to_values<T: Serialize>(items: &[T]) -> Result<Vec<Value>, serde_json::Error> {
    items.iter().map(serde_json::to_value).collect()
}

/// Reshapes a payload into the value stored under `data`
pub fn process_response_data(data: ResponseData) -> Value {
    match data {
        ResponseData::Collection { items, pagination: Some(meta) } => {
            let pagination = meta.to_block(items.len());
            json!({
                "items": items,
                "pagination": pagination,
            })
        }
        ResponseData::Collection { items, pagination: None } => Value::Array(items),
        ResponseData::Resource(resolved) => resolved,
        ResponseData::Plain(value) => value,
    }
}

/// Error details accepted by the error path
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    Bag(MessageBag),
    Text(String),
    Raw(Value),
}

impl From<MessageBag> for ErrorDetail {
    fn from(bag: MessageBag) -> Self {
        Self::Bag(bag)
    }
}

impl From<String> for ErrorDetail {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for ErrorDetail {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Value> for ErrorDetail {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

/// Formats error details consistently: bags become `{field: [messages]}`,
/// plain strings become `{general: [string]}`, anything else is left as is
pub fn format_errors(errors: ErrorDetail) -> Value {
    match errors {
        ErrorDetail::Bag(bag) => json!(bag),
        ErrorDetail::Text(text) => json!({ "general": [text] }),
        ErrorDetail::Raw(value) => value,
    }
}

/// Status code, envelope and extra headers of a single API response
#[derive(Debug)]
pub struct ApiResponse {
    status: StatusCode,
    envelope: Envelope,
    headers: HeaderMap,
    report: Option<ExceptionReport>,
}

impl ApiResponse {
    /// Generic success builder; `data` is omitted from the envelope when absent or null
    pub fn success(data: Option<ResponseData>, message: impl Into<String>, status: StatusCode) -> Self {
        let mut envelope: Envelope = Envelope::new(status, message.into());
        envelope.data = data.map(process_response_data).filter(|value| !value.is_null());

        Self {
            status,
            envelope,
            headers: HeaderMap::new(),
            report: None,
        }
    }

    /// Generic error builder; `errors` is omitted from the envelope when absent
    pub fn error(message: impl Into<String>, status: StatusCode, errors: Option<ErrorDetail>) -> Self {
        let mut envelope: Envelope = Envelope::new(status, message.into());
        envelope.errors = errors.map(format_errors);

        Self {
            status,
            envelope,
            headers: HeaderMap::new(),
            report: None,
        }
    }

    pub fn ok(data: impl Into<ResponseData>) -> Self {
        Self::success(Some(data.into()), "Success", StatusCode::OK)
    }

    pub fn created(data: impl Into<ResponseData>) -> Self {
        Self::success(Some(data.into()), "Resource created successfully", StatusCode::CREATED)
    }

    pub fn bad_request() -> Self {
        Self::error("Bad request", StatusCode::BAD_REQUEST, None)
    }

    pub fn unauthorized() -> Self {
        Self::error("Unauthorized", StatusCode::UNAUTHORIZED, None)
    }

    pub fn forbidden() -> Self {
        Self::error("Forbidden", StatusCode::FORBIDDEN, None)
    }

    pub fn not_found() -> Self {
        Self::error("Resource not found", StatusCode::NOT_FOUND, None)
    }

    pub fn unprocessable_entity() -> Self {
        Self::error("Validation failed", StatusCode::UNPROCESSABLE_ENTITY, None)
    }

    pub fn server_error() -> Self {
        Self::error("Server error", StatusCode::INTERNAL_SERVER_ERROR, None)
    }

    /// Replaces the envelope message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.envelope.message = message.into();
        self
    }

    /// Sets the formatted `errors` detail
    pub fn errors(mut self, errors: impl Into<ErrorDetail>) -> Self {
        self.envelope.errors = Some(format_errors(errors.into()));
        self
    }

    /// Adds an extra header, sent verbatim
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merges a set of extra headers, sent verbatim
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    pub(crate) fn with_report(mut self, report: ExceptionReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn report(&self) -> Option<&ExceptionReport> {
        self.report.as_ref()
    }

    pub fn into_envelope(self) -> Envelope {
        self.envelope
    }
}

/// Logs the final envelope with proper JSON indentation
fn log_formatted_response(status: StatusCode, envelope: &Envelope) {
    match to_two_space_indented_json(envelope) {
        Ok(spaced_json) => debug!(status = status.as_u16(), "\nFinal response:\n{}", spaced_json),
        Err(err) => error!("Failed to format response JSON: {:?}", err),
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        log_formatted_response(self.status, &self.envelope);

        let mut response: Response = (self.status, self.headers, Json(self.envelope)).into_response();

        // Picked up by the exception reporting middleware, which knows the request
        if let Some(report) = self.report {
            response.extensions_mut().insert(report);
        }

        response
    }
}
