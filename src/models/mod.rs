// Start of file: /src/models/mod.rs

/*
    * Data models persisted by the database layer and exposed by the API.
*/

pub mod product;

pub use product::{NewProduct, Product, ProductResource};

// End of file: /src/models/mod.rs
