pub mod cli;
pub mod search_page;

pub use search_page::{EmptyState, EmptyStateAction, ProjectCard, SearchPageView};
