//! rltab: a terminal viewer for tabular JSON datasets.
//!
//! Loads a dataset once, then lets the user filter it by group, name, and
//! code with debounced text input, page through the filtered subset, and
//! export it as a dated JSON file. The core pipeline (filter, pager, state)
//! is plain synchronous code; the app layer drives it from async input and
//! timer events and pushes frames at a pluggable render sink.

pub mod app;
pub mod debounce;
pub mod error;
pub mod export;
pub mod format;
pub mod highlight;
pub mod input;
pub mod record;
pub mod render;
pub mod source;
pub mod table;

pub use app::Application;
pub use error::{Result, RltabError};
pub use record::{Amount, FilterField, Record};
pub use render::RenderSink;
pub use source::{DataSource, JsonFileSource};
pub use table::{FilterCriteria, PageRequest, TableState, DEFAULT_PAGE_SIZE};

/// Version of the rltab crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
