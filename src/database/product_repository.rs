// Queries against the products table

use sqlx::{PgExecutor, PgPool};

use crate::models::product::{NewProduct, Product};

// NUMERIC is read back as float8, the API exposes prices as JSON numbers
const PRODUCT_COLUMNS: &str =
    "id, name, description, price::float8 AS price, image_url, created_at, updated_at";

pub async fn count(pool: &PgPool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await
}

/// One page of products, oldest first
pub async fn page(pool: &PgPool, limit: i64, offset: i64) -> sqlx::Result<Vec<Product>> {
    sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id LIMIT $1 OFFSET $2"
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn find(pool: &PgPool, id: i64) -> sqlx::Result<Option<Product>> {
    sqlx::query_as::<_, Product>(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert<'e, E>(executor: E, product: &NewProduct) -> sqlx::Result<Product>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Product>(&format!(
        r#"
        INSERT INTO products (name, description, price, image_url, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW(), NOW())
        RETURNING {PRODUCT_COLUMNS}
        "#
    ))
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(&product.image_url)
    .fetch_one(executor)
    .await
}
