/*
* Product catalog endpoints: paginated listing, lookup by id and creation.
*/

pub mod handler;
pub mod routes;

pub use routes::product_routes;
