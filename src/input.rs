//! Input handling: key events to domain actions.
//!
//! A small state machine with two modes: browsing (page navigation, export,
//! quit) and filter editing (one buffer per filterable field, Tab cycles
//! between them). The machine emits [`InputAction`]s; it knows nothing about
//! the pipeline or the debounce policy.

use crate::error::Result;
use crate::record::FilterField;
use crate::table::PageRequest;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    FilterEdit { field: FilterField },
}

/// High-level actions emitted by the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// Navigate to another page.
    Page(PageRequest),
    /// The user entered filter-edit mode on a field.
    BeginFilter(FilterField),
    /// A filter buffer changed; the app debounces before applying.
    FilterEdited { field: FilterField, buffer: String },
    /// Filter editing finished (Enter or Esc).
    EndFilter,
    /// Export the current filtered set.
    Export,
    /// Terminal was resized; re-render the current frame.
    Redraw,
    Quit,
    NoAction,
    InvalidInput,
}

/// Key-event state machine for the table viewer.
pub struct InputStateMachine {
    mode: InputMode,
    buffers: [String; 3],
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self {
            mode: InputMode::Browse,
            buffers: Default::default(),
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn buffer(&self, field: FilterField) -> &str {
        &self.buffers[buffer_index(field)]
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        // Ctrl-C quits from any mode
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            return InputAction::Quit;
        }

        match self.mode {
            InputMode::Browse => self.handle_browse_key(key_event),
            InputMode::FilterEdit { field } => self.handle_filter_key(field, key_event),
        }
    }

    fn handle_browse_key(&mut self, key_event: KeyEvent) -> InputAction {
        match key_event.code {
            KeyCode::Char('q') => InputAction::Quit,
            KeyCode::Left | KeyCode::Char('h') => InputAction::Page(PageRequest::Prev),
            KeyCode::Right | KeyCode::Char('l') => InputAction::Page(PageRequest::Next),
            KeyCode::Home | KeyCode::Char('g') => InputAction::Page(PageRequest::First),
            KeyCode::End | KeyCode::Char('G') => InputAction::Page(PageRequest::Last),
            KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
                InputAction::Page(PageRequest::Jump(ch as usize - '0' as usize))
            }
            KeyCode::Char('e') => InputAction::Export,
            KeyCode::Char('/') | KeyCode::Tab => {
                self.mode = InputMode::FilterEdit {
                    field: FilterField::GroupName,
                };
                InputAction::BeginFilter(FilterField::GroupName)
            }
            _ => InputAction::InvalidInput,
        }
    }

    fn handle_filter_key(&mut self, field: FilterField, key_event: KeyEvent) -> InputAction {
        match key_event.code {
            KeyCode::Tab => {
                let next = field.next();
                self.mode = InputMode::FilterEdit { field: next };
                InputAction::BeginFilter(next)
            }
            KeyCode::Enter | KeyCode::Esc => {
                self.mode = InputMode::Browse;
                InputAction::EndFilter
            }
            KeyCode::Backspace => {
                let buffer = &mut self.buffers[buffer_index(field)];
                buffer.pop();
                InputAction::FilterEdited {
                    field,
                    buffer: buffer.clone(),
                }
            }
            KeyCode::Char(ch)
                if !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let buffer = &mut self.buffers[buffer_index(field)];
                buffer.push(ch);
                InputAction::FilterEdited {
                    field,
                    buffer: buffer.clone(),
                }
            }
            _ => InputAction::InvalidInput,
        }
    }
}

impl Default for InputStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_index(field: FilterField) -> usize {
    match field {
        FilterField::GroupName => 0,
        FilterField::Name => 1,
        FilterField::Code => 2,
    }
}

/// Poll one terminal event and translate it, dropping no-ops.
pub fn poll_action(machine: &mut InputStateMachine, timeout: Duration) -> Result<Option<InputAction>> {
    if event::poll(timeout)? {
        let action = match event::read()? {
            Event::Key(key_event) => machine.handle_key_event(key_event),
            Event::Resize(_, _) => InputAction::Redraw,
            _ => InputAction::NoAction,
        };
        match action {
            InputAction::NoAction | InputAction::InvalidInput => Ok(None),
            other => Ok(Some(other)),
        }
    } else {
        Ok(None)
    }
}

/// Spawn a blocking thread that collects terminal input and forwards actions
/// onto a channel consumed by the app loop.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut machine = InputStateMachine::new();
        while !shutdown.load(Ordering::SeqCst) {
            match poll_action(&mut machine, poll_interval) {
                Ok(Some(action)) => {
                    if tx.send(action).is_err() {
                        break;
                    }
                }
                Ok(None) => continue,
                Err(err) => {
                    log::error!("input thread error: {err}");
                    break;
                }
            }
        }
    })
}
