//! Terminal render sink built on ratatui.
//!
//! Pure presentation: takes the frame descriptors from the pipeline and
//! draws the filter prompt, the table grid with highlight spans, the stats
//! line, and the pagination controls. No pipeline state lives here.

use crate::error::Result;
use crate::highlight::segments;
use crate::record::FilterField;
use crate::render::protocol::{CellView, TableFrame, ViewFrame, COLUMNS};
use crate::render::RenderSink;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Styling for the table surface.
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub header: Style,
    pub highlight: Style,
    pub prompt_active: Style,
    pub status: Style,
    pub disabled: Style,
    pub active_page: Style,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            header: Style::default().add_modifier(Modifier::BOLD),
            highlight: Style::default().bg(Color::Yellow).fg(Color::Black),
            prompt_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            status: Style::default().bg(Color::Blue).fg(Color::White),
            disabled: Style::default().fg(Color::DarkGray),
            active_page: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

/// Ratatui-backed implementation of [`RenderSink`].
pub struct TerminalTableUi {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalTableUi {
    pub fn new() -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme: ColorTheme::default(),
        })
    }

    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    fn draw_centered_message(frame: &mut Frame, text: &str, style: Style) {
        let area = frame.size();
        let line = Line::from(Span::styled(text.to_string(), style));
        let vertical = area.height / 2;
        let target = Rect::new(area.x, area.y + vertical, area.width, 1);
        frame.render_widget(Paragraph::new(line).centered(), target);
    }

    fn draw_table(frame: &mut Frame, table_frame: &TableFrame, theme: &ColorTheme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // filter prompt
                Constraint::Min(1),    // table grid
                Constraint::Length(1), // stats
                Constraint::Length(1), // pagination controls
            ])
            .split(frame.size());

        Self::draw_filter_prompt(frame, chunks[0], table_frame, theme);
        Self::draw_grid(frame, chunks[1], table_frame, theme);
        Self::draw_stats(frame, chunks[2], table_frame, theme);
        Self::draw_pagination(frame, chunks[3], table_frame, theme);
    }

    fn draw_filter_prompt(
        frame: &mut Frame,
        area: Rect,
        table_frame: &TableFrame,
        theme: &ColorTheme,
    ) {
        let mut spans = Vec::new();
        for field in FilterField::ALL {
            let active = table_frame.editing == Some(field);
            let style = if active {
                theme.prompt_active
            } else {
                Style::default()
            };
            let term = table_frame.criteria.term(field);
            let cursor = if active { "_" } else { "" };
            spans.push(Span::styled(
                format!("{}: [{}{}]  ", field.label(), term, cursor),
                style,
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_grid(frame: &mut Frame, area: Rect, table_frame: &TableFrame, theme: &ColorTheme) {
        if table_frame.is_empty() {
            frame.render_widget(
                Paragraph::new("No records match the current filters").centered(),
                area,
            );
            return;
        }

        let header = Row::new(COLUMNS.iter().map(|&name| Cell::from(name)))
            .style(theme.header)
            .height(1);

        let rows = table_frame.rows.iter().map(|row| {
            Row::new(
                row.cells
                    .iter()
                    .map(|cell| Cell::from(Self::highlighted_line(cell, theme))),
            )
        });

        let widths = [
            Constraint::Fill(2),
            Constraint::Length(10),
            Constraint::Fill(3),
            Constraint::Length(10),
            Constraint::Fill(3),
            Constraint::Fill(3),
            Constraint::Length(14),
            Constraint::Length(10),
        ];

        let table = Table::new(rows, widths).header(header).column_spacing(1);
        frame.render_widget(table, area);
    }

    /// Build a line from a cell's text and its highlight byte ranges.
    fn highlighted_line<'a>(cell: &'a CellView, theme: &ColorTheme) -> Line<'a> {
        if cell.highlights.is_empty() {
            return Line::from(cell.text.as_str());
        }

        let spans: Vec<Span<'a>> = segments(&cell.text, &cell.highlights)
            .into_iter()
            .map(|segment| {
                if segment.matched {
                    Span::styled(segment.text, theme.highlight)
                } else {
                    Span::raw(segment.text)
                }
            })
            .collect();
        Line::from(spans)
    }

    fn draw_stats(frame: &mut Frame, area: Rect, table_frame: &TableFrame, theme: &ColorTheme) {
        let mut text = format!(
            "{} records | {} matching",
            table_frame.total_records, table_frame.filtered_records,
        );
        if let Some(status) = &table_frame.status {
            text.push_str(" | ");
            text.push_str(status);
        }
        frame.render_widget(Paragraph::new(text).style(theme.status), area);
    }

    fn draw_pagination(
        frame: &mut Frame,
        area: Rect,
        table_frame: &TableFrame,
        theme: &ColorTheme,
    ) {
        let control = |label: &'static str, enabled: bool| {
            let style = if enabled {
                Style::default()
            } else {
                theme.disabled
            };
            Span::styled(label, style)
        };

        let mut spans = vec![
            control("|< ", table_frame.nav.first),
            control("< ", table_frame.nav.prev),
        ];
        for &page in &table_frame.page_window {
            let style = if page == table_frame.current_page {
                theme.active_page
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {page} "), style));
        }
        spans.push(control(" >", table_frame.nav.next));
        spans.push(control(" >|", table_frame.nav.last));
        spans.push(Span::raw(format!(
            "   page {}/{}",
            table_frame.current_page, table_frame.total_pages
        )));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl RenderSink for TerminalTableUi {
    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);
        Ok(())
    }

    fn render(&mut self, view: &ViewFrame) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;
            terminal.draw(move |frame| match view {
                ViewFrame::Loading => {
                    Self::draw_centered_message(frame, "Loading data ...", Style::default())
                }
                ViewFrame::Error(message) => Self::draw_centered_message(
                    frame,
                    message,
                    Style::default().fg(Color::Red),
                ),
                ViewFrame::Table(table_frame) => Self::draw_table(frame, table_frame, theme),
            })?;
        }
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
            self.terminal = None;
        }
        Ok(())
    }
}

impl Drop for TerminalTableUi {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_ui_creation() {
        let ui = TerminalTableUi::new().unwrap();
        assert!(ui.terminal.is_none());

        let themed = TerminalTableUi::with_theme(ColorTheme::default()).unwrap();
        assert!(themed.terminal.is_none());
    }

    #[test]
    fn test_highlighted_line_splits_spans() {
        let theme = ColorTheme::default();
        let cell = CellView {
            text: "Green Tea".to_string(),
            highlights: vec![(6, 9)],
        };
        let line = TerminalTableUi::highlighted_line(&cell, &theme);
        let rebuilt: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rebuilt, "Green Tea");
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].style, theme.highlight);
    }

    #[test]
    fn test_plain_cell_is_single_span() {
        let theme = ColorTheme::default();
        let cell = CellView {
            text: "plain".to_string(),
            highlights: Vec::new(),
        };
        let line = TerminalTableUi::highlighted_line(&cell, &theme);
        assert_eq!(line.spans.len(), 1);
    }
}
