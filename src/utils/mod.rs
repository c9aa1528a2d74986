// Start of file: /src/utils/mod.rs

/*
    * Re-exports for all utility modules: the response envelope builder,
    * the error classifier, pagination, validation helpers and extractors.
*/

pub mod error_handler;
pub mod extractors;
pub mod message_bag;
pub mod pagination;
pub mod response_handler;
pub mod utils;

pub use error_handler::{ApiError, ExceptionReport};
pub use message_bag::MessageBag;
pub use pagination::{LengthAwarePaginator, PageQuery, PaginationMeta};
pub use response_handler::{ApiResponse, Envelope, ErrorDetail, ResponseData};

// End of file: /src/utils/mod.rs
