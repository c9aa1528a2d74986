// Library root for the catalog API: response envelopes, error classification and product seeding

pub mod api;
pub mod config;
pub mod core;
pub mod database;
pub mod models;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::database::DatabaseService;
pub use crate::utils::error_handler::ApiError;
pub use crate::utils::response_handler::{ApiResponse, Envelope, ErrorDetail, ResponseData};
