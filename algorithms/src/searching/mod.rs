pub mod binary_search;
pub mod hash_index;

pub use binary_search::{binary_search, lower_bound, search, search_checked, SearchError};
