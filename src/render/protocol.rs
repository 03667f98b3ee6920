//! Frame descriptors pushed from the pipeline to the render sink.
//!
//! The core hands the sink plain data: formatted cell text plus highlight
//! byte ranges, page-control state, and derived counts. Styling stays
//! entirely on the sink side.

use crate::format::{format_amount, format_date};
use crate::highlight::match_ranges;
use crate::record::{FilterField, Record};
use crate::table::{page_window, FilterCriteria, TableState, PAGE_WINDOW_WIDTH};

/// Column headers, in display order.
pub const COLUMNS: [&str; 8] = [
    "Group",
    "Code",
    "Name",
    "Customer code",
    "Customer name",
    "Address",
    "Revenue",
    "Uploaded",
];

/// What the sink should display.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewFrame {
    /// Initial fetch in flight.
    Loading,
    /// Terminal error state after a failed fetch.
    Error(String),
    /// A ready table snapshot.
    Table(TableFrame),
}

/// One rendered cell: display text plus highlight byte ranges into it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellView {
    pub text: String,
    pub highlights: Vec<(usize, usize)>,
}

impl CellView {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlights: Vec::new(),
        }
    }

    fn highlighted(text: impl Into<String>, term: Option<&str>) -> Self {
        let text = text.into();
        let highlights = match term {
            Some(term) => match_ranges(&text, term),
            None => Vec::new(),
        };
        Self { text, highlights }
    }
}

/// One visible row, cells in [`COLUMNS`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub cells: Vec<CellView>,
}

/// Enabled state for the first/prev/next/last controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    pub first: bool,
    pub prev: bool,
    pub next: bool,
    pub last: bool,
}

/// A complete table snapshot for one recompute.
///
/// An empty `rows` vector is the "no data" descriptor: the sink shows a
/// placeholder row instead of an empty grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TableFrame {
    pub rows: Vec<RowView>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_window: Vec<usize>,
    pub nav: NavControls,
    pub total_records: usize,
    pub filtered_records: usize,
    /// Criteria shown in the filter prompt; during editing the app swaps in
    /// the draft (not yet debounce-applied) terms.
    pub criteria: FilterCriteria,
    /// Field currently being edited, if the user is in filter-input mode.
    pub editing: Option<FilterField>,
    pub status: Option<String>,
}

impl TableFrame {
    /// Build a snapshot of the current page from the pipeline state.
    pub fn from_state(state: &TableState) -> Self {
        let bounds = state.bounds();
        let criteria = state.criteria();

        let rows = state
            .page_records()
            .iter()
            .map(|record| build_row(record, criteria))
            .collect();

        Self {
            rows,
            current_page: bounds.current_page,
            total_pages: bounds.total_pages,
            page_window: page_window(bounds.current_page, bounds.total_pages, PAGE_WINDOW_WIDTH),
            nav: NavControls {
                first: bounds.current_page > 1,
                prev: bounds.current_page > 1,
                next: bounds.current_page < bounds.total_pages,
                last: bounds.current_page < bounds.total_pages,
            },
            total_records: state.total_records(),
            filtered_records: state.filtered_records(),
            criteria: criteria.clone(),
            editing: None,
            status: state.status().map(str::to_string),
        }
    }

    /// True when the current page window holds no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn build_row(record: &Record, criteria: &FilterCriteria) -> RowView {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    RowView {
        cells: vec![
            CellView::highlighted(
                text(&record.group_name),
                criteria.active_term(FilterField::GroupName),
            ),
            CellView::highlighted(text(&record.code), criteria.active_term(FilterField::Code)),
            CellView::highlighted(text(&record.name), criteria.active_term(FilterField::Name)),
            CellView::plain(text(&record.customer_code)),
            CellView::plain(text(&record.customer_name)),
            CellView::plain(text(&record.address)),
            CellView::plain(format_amount(record.revenue.as_ref())),
            CellView::plain(
                record
                    .upload_date
                    .as_deref()
                    .map(format_date)
                    .unwrap_or_default(),
            ),
        ],
    }
}
