// Fixed catalog of products inserted at setup time

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::database::product_repository;
use crate::models::product::NewProduct;

struct ProductFixture {
    name: &'static str,
    description: &'static str,
    price: f64,
    image_url: &'static str,
}

const PRODUCTS: [ProductFixture; 5] = [
    ProductFixture {
        name: "iPhone 15 Pro",
        description: "Latest iPhone with advanced features",
        price: 999.99,
        image_url: "https://example.com/iphone15.jpg",
    },
    ProductFixture {
        name: "Samsung Galaxy S24",
        description: "Flagship Android smartphone",
        price: 899.99,
        image_url: "https://example.com/galaxy-s24.jpg",
    },
    ProductFixture {
        name: "MacBook Pro M3",
        description: "Professional laptop for developers",
        price: 1999.99,
        image_url: "https://example.com/macbook-pro.jpg",
    },
    ProductFixture {
        name: "AirPods Pro",
        description: "Wireless earbuds with noise cancellation",
        price: 249.99,
        image_url: "https://example.com/airpods-pro.jpg",
    },
    ProductFixture {
        name: "iPad Air",
        description: "Versatile tablet for work and entertainment",
        price: 599.99,
        image_url: "https://example.com/ipad-air.jpg",
    },
];

impl From<&ProductFixture> for NewProduct {
    fn from(fixture: &ProductFixture) -> Self {
        Self {
            name: fixture.name.to_string(),
            description: Some(fixture.description.to_string()),
            price: fixture.price,
            image_url: Some(fixture.image_url.to_string()),
        }
    }
}

/// Inserts the product catalog. Runs unconditionally: seeding twice inserts the rows twice.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductSeeder;

impl ProductSeeder {
    pub fn products(&self) -> Vec<NewProduct> {
        PRODUCTS.iter().map(NewProduct::from).collect()
    }

    #[instrument(name = "product_seeder", skip_all)]
    pub async fn run(&self, pool: &PgPool) -> Result<u64> {
        let mut inserted: u64 = 0;

        for product in self.products() {
            product_repository::insert(pool, &product)
                .await
                .with_context(|| format!("Failed to seed product '{}'", product.name))?;
            inserted += 1;
        }

        info!(inserted, "Products seeded");
        Ok(inserted)
    }
}
