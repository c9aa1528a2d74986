// Product rows, the create payload and the public resource shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row of the `products` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to insert a product; also the body of `POST /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, max = 255, message = "The name must be between 1 and 255 characters."))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, max = 99999999.99, message = "The price must be between 0 and 99999999.99."))]
    pub price: f64,
    #[validate(url(message = "The image url must be a valid URL."))]
    pub image_url: Option<String>,
}

/// Public JSON representation of a product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResource {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Product> for ProductResource {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            created_at: product.created_at.to_rfc3339(),
            updated_at: product.updated_at.to_rfc3339(),
        }
    }
}
