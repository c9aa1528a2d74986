// Product catalog handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header::LOCATION, HeaderValue},
};
use tracing::{info, instrument};

use crate::config::state::AppState;
use crate::database::product_repository;
use crate::models::product::{NewProduct, ProductResource};
use crate::utils::{
    error_handler::ApiError,
    extractors::{ValidatedJson, ValidatedQuery},
    pagination::{LengthAwarePaginator, PageQuery},
    response_handler::{ApiResponse, ResponseData},
};

/// Lists products one page at a time
#[instrument(name = "list_products", skip_all)]
pub async fn list_products_handler(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> Result<ApiResponse, ApiError> {
    let pool = state.database.pool();

    let total: i64 = product_repository::count(pool).await?;
    let limit: i64 = i64::try_from(query.per_page()).map_err(ApiError::server)?;
    let offset: i64 = i64::try_from(query.offset()).map_err(ApiError::server)?;

    let products = product_repository::page(pool, limit, offset).await?;
    let resources: Vec<ProductResource> = products.iter().map(ProductResource::from).collect();

    info!("Retrieved {} of {} products (page {})", resources.len(), total, query.page());

    let paginator: LengthAwarePaginator<ProductResource> = LengthAwarePaginator::new(
        resources,
        u64::try_from(total).unwrap_or_default(),
        query.per_page(),
        query.page(),
        format!("{}/products", state.environment.base_url()),
    );

    Ok(ApiResponse::ok(ResponseData::paginated(&paginator)?).message("Products retrieved successfully"))
}

/// Returns a single product
#[instrument(name = "show_product", skip_all)]
pub async fn show_product_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<ApiResponse, ApiError> {
    let Path(id) = id?;

    let product = product_repository::find(state.database.pool(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No product found with id {id}")))?;

    Ok(ApiResponse::ok(ResponseData::resource(&ProductResource::from(&product))?)
        .message("Product retrieved successfully"))
}

/// Creates a product from a validated body
#[instrument(name = "create_product", skip_all)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<NewProduct>,
) -> Result<ApiResponse, ApiError> {
    let product = product_repository::insert(state.database.pool(), &request).await?;

    info!("Created product {} ({})", product.id, product.name);

    let location: HeaderValue =
        HeaderValue::from_str(&format!("/products/{}", product.id)).map_err(ApiError::server)?;

    Ok(ApiResponse::created(ResponseData::resource(&ProductResource::from(&product))?)
        .message("Product created successfully")
        .header(LOCATION, location))
}
