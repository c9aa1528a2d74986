pub mod postgres_service;
pub mod product_repository;
pub mod seeders;

pub use postgres_service::DatabaseService;
