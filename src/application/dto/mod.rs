pub mod pagination;
pub mod search_request;

pub use pagination::PageWindow;
pub use search_request::{SearchRequest, calculate_offset};
