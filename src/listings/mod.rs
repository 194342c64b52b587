//! Budget bucketing, filtering and pagination over an in-memory property list.
//!
//! Everything here is synchronous and side-effect free apart from logging.

pub mod budget;
pub mod catalog;
pub mod filter;
pub mod pagination;
pub mod state;

pub use budget::{
    compute_budget_ranges, find_range, BudgetRange, LabelStyle, StepSchedule,
    LARGEST_STEP_STANDARD, LARGEST_STEP_WIDE,
};
pub use catalog::{Catalog, ListingPage};
pub use filter::{facet_options, filter_properties, Facet, FilterSelection, UNDER_CONSTRUCTION};
pub use pagination::{page_window, paginate, total_pages, DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_SIZE};
pub use state::BrowseState;
