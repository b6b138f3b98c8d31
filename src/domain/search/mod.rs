pub mod criteria;
pub mod filters;
pub mod preferences;
pub mod query_string;

pub use criteria::{PageNumber, SearchCriteria};
pub use filters::{FilterCategory, FilterSelection};
pub use preferences::{PageSize, SearchPreferences, SortBy, SortDirection, SortOptions};
