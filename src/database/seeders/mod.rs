// Seeders populating the database with fixture data

pub mod product_seeder;

use anyhow::Result;
use sqlx::PgPool;

pub use product_seeder::ProductSeeder;

/// Runs every seeder, returning the total number of inserted rows
pub async fn run_all(pool: &PgPool) -> Result<u64> {
    let products: u64 = ProductSeeder.run(pool).await?;
    Ok(products)
}
