/*
* Health and diagnostic endpoints. The /errors routes raise one error
* category each so the envelope of every path can be checked end to end.
*/

pub mod handler;
pub mod routes;

pub use routes::diagnostics_routes;
