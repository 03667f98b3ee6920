//! Application orchestration.
//!
//! Wires the pieces together: fetch the dataset from the source, keep the
//! pipeline state, debounce filter edits, and push a fresh frame at the
//! render sink after every observable change. The event loop multiplexes
//! input actions and the debounce timer with `select!`.

use crate::debounce::Debouncer;
use crate::error::Result;
use crate::input::{spawn_input_thread, InputAction};
use crate::record::FilterField;
use crate::render::protocol::{TableFrame, ViewFrame};
use crate::render::RenderSink;
use crate::source::DataSource;
use crate::table::{FilterCriteria, TableState, DEFAULT_PAGE_SIZE};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The viewer application: one source, one sink, one pipeline.
pub struct Application {
    source: Box<dyn DataSource>,
    sink: Box<dyn RenderSink>,
    state: TableState,
    debouncer: Debouncer,
    /// Criteria as typed so far, ahead of the debounced application.
    draft: FilterCriteria,
    editing: Option<FilterField>,
    export_dir: PathBuf,
}

impl Application {
    pub fn new(source: Box<dyn DataSource>, sink: Box<dyn RenderSink>) -> Self {
        Self {
            source,
            sink,
            state: TableState::new(DEFAULT_PAGE_SIZE),
            debouncer: Debouncer::with_default_delay(),
            draft: FilterCriteria::default(),
            editing: None,
            export_dir: PathBuf::from("."),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.state = TableState::new(page_size);
        self
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    /// Run against the real terminal: spawn the input thread and loop until
    /// the user quits.
    pub async fn run(&mut self) -> Result<()> {
        let (tx, rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_handle = spawn_input_thread(tx, Arc::clone(&shutdown), INPUT_POLL_INTERVAL);

        let result = self.run_with_input(rx).await;

        shutdown.store(true, Ordering::SeqCst);
        let _ = input_handle.join();
        result
    }

    /// Run the event loop over an externally supplied action stream. The loop
    /// ends when a Quit action arrives or the stream closes.
    pub async fn run_with_input(&mut self, mut rx: UnboundedReceiver<InputAction>) -> Result<()> {
        self.sink.initialize()?;
        let outcome = self.event_loop(&mut rx).await;
        self.sink.cleanup()?;
        outcome
    }

    async fn event_loop(&mut self, rx: &mut UnboundedReceiver<InputAction>) -> Result<()> {
        self.sink.render(&ViewFrame::Loading)?;

        match self.source.fetch_records().await {
            Ok(records) => {
                let count = records.len();
                self.state.load(records);
                self.state
                    .set_status(format!("Loaded {count} records from {}", self.source.describe()));
                log::info!("loaded {count} records");
                self.render_table()?;
            }
            Err(err) => {
                // Terminal error state: show the failure until the user quits.
                log::error!("initial fetch failed: {err}");
                self.sink
                    .render(&ViewFrame::Error(format!("Failed to load data: {err}")))?;
                while let Some(action) = rx.recv().await {
                    if action == InputAction::Quit {
                        return Ok(());
                    }
                }
                return Ok(());
            }
        }

        loop {
            tokio::select! {
                // Biased so a due filter application runs before input that
                // arrived after it, instead of losing a coin flip to a
                // queued quit or navigation.
                biased;
                _ = self.debouncer.expired() => {
                    self.apply_draft();
                    self.render_table()?;
                }
                action = rx.recv() => {
                    match action {
                        Some(InputAction::Quit) | None => return Ok(()),
                        Some(action) => {
                            self.handle_action(action);
                            self.render_table()?;
                        }
                    }
                }
            }
        }
    }

    fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Page(request) => {
                self.state.clear_status();
                self.state.navigate(request);
            }
            InputAction::BeginFilter(field) => {
                self.editing = Some(field);
            }
            InputAction::FilterEdited { field, buffer } => {
                self.draft.set(field, &buffer);
                self.debouncer.schedule();
            }
            InputAction::EndFilter => {
                // A pending debounce still applies; leaving edit mode does
                // not discard typed criteria.
                self.editing = None;
            }
            InputAction::Export => self.export(),
            InputAction::Redraw
            | InputAction::Quit
            | InputAction::NoAction
            | InputAction::InvalidInput => {}
        }
    }

    /// Install the draft criteria once the debounce quiet period elapses.
    fn apply_draft(&mut self) {
        self.state.clear_status();
        self.state.set_criteria(self.draft.clone());
        log::debug!(
            "filter applied, {} of {} records match",
            self.state.filtered_records(),
            self.state.total_records()
        );
    }

    fn export(&mut self) {
        match crate::export::write_filtered(self.state.filtered(), &self.export_dir) {
            Ok(path) => {
                self.state.set_status(format!(
                    "Exported {} records to {}",
                    self.state.filtered_records(),
                    path.display()
                ));
            }
            Err(err) => {
                log::error!("export failed: {err}");
                self.state.set_status(format!("Export failed: {err}"));
            }
        }
    }

    fn render_table(&mut self) -> Result<()> {
        let mut frame = TableFrame::from_state(&self.state);
        // The prompt shows what the user typed, not what is applied yet.
        frame.criteria = self.draft.clone();
        frame.editing = self.editing;
        self.sink.render(&ViewFrame::Table(frame))
    }
}
