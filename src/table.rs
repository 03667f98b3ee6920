//! The filter/paginate core.
//!
//! This module owns the only non-trivial logic in rltab: applying the
//! three-field filter conjunction, recomputing derived counts, slicing the
//! current page window, and keeping `1 <= current_page <= total_pages` true
//! after every mutation. Everything here is synchronous, pure where possible,
//! and has no dependency on any presentation technology.

pub mod filter;
pub mod pager;
pub mod state;

pub use filter::FilterCriteria;
pub use pager::{page_window, paginate, total_pages, PageBounds, PageRequest};
pub use state::TableState;

/// Records shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Width of the sliding page-number window shown in the pagination controls.
pub const PAGE_WINDOW_WIDTH: usize = 5;
