pub mod diagnostics;
pub mod products;
