//! Owning state for the filter/paginate pipeline.
//!
//! `TableState` holds the dataset, the filtered subset, the active criteria,
//! and the pagination cursor. It is an explicit, constructed object with no
//! module-level globals, so the whole pipeline can be driven headless in
//! tests. Every mutation recomputes derived state synchronously; there is no
//! observable intermediate state between a mutation and the next snapshot.

use crate::record::Record;
use crate::table::filter::FilterCriteria;
use crate::table::pager::{paginate, PageBounds, PageRequest};

/// The record store plus filter and pagination state, single-owner.
#[derive(Debug, Clone)]
pub struct TableState {
    dataset: Vec<Record>,
    filtered: Vec<Record>,
    criteria: FilterCriteria,
    current_page: usize,
    page_size: usize,
    status: Option<String>,
}

impl TableState {
    /// Create an empty table with the given page size.
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            dataset: Vec::new(),
            filtered: Vec::new(),
            criteria: FilterCriteria::default(),
            current_page: 1,
            page_size,
            status: None,
        }
    }

    /// Replace the dataset wholesale, re-apply the active criteria, and
    /// return to the first page.
    pub fn load(&mut self, records: Vec<Record>) {
        self.dataset = records;
        self.filtered = self.criteria.apply(&self.dataset);
        self.current_page = 1;
    }

    /// Install new filter criteria: recompute the filtered subset and reset
    /// the cursor to page 1 (the filter-change policy, not mere clamping).
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.filtered = self.criteria.apply(&self.dataset);
        self.current_page = 1;
    }

    /// Apply a navigation request; the result is always a valid page.
    pub fn navigate(&mut self, request: PageRequest) {
        let bounds = self.bounds();
        let requested = request.resolve(bounds.current_page, bounds.total_pages);
        self.current_page = paginate(self.filtered.len(), self.page_size, requested).current_page;
    }

    /// Current page bounds over the filtered subset.
    pub fn bounds(&self) -> PageBounds {
        paginate(self.filtered.len(), self.page_size, self.current_page)
    }

    /// The records visible on the current page.
    pub fn page_records(&self) -> &[Record] {
        let bounds = self.bounds();
        &self.filtered[bounds.start..bounds.end]
    }

    /// The entire filtered subset, in original dataset order.
    pub fn filtered(&self) -> &[Record] {
        &self.filtered
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_records(&self) -> usize {
        self.dataset.len()
    }

    pub fn filtered_records(&self) -> usize {
        self.filtered.len()
    }

    /// Set a transient status message carried on the next frame.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
