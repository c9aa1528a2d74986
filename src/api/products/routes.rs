// Product catalog route definitions

use axum::{
    routing::get,
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the product catalog endpoints
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handler::list_products_handler).post(handler::create_product_handler),
        )
        .route("/products/{id}", get(handler::show_product_handler))
}
