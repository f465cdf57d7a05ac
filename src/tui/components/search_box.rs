//! # SearchBox Component
//!
//! Single-line query input above the A-Z list. Every edit emits
//! `SearchEvent::Changed` so the list filters as the user types.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search Cocktails...";

/// Events emitted by the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query text changed.
    Changed(String),
    /// Enter: keep the query and hand focus back to the list.
    Done,
    /// Esc: clear the query and hand focus back to the list.
    Cancel,
}

#[derive(Debug, Default)]
pub struct SearchBox {
    buffer: String,
    /// Whether the box currently has keyboard focus (drives border color and cursor).
    pub focused: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(data) => {
                // Single-line input: newlines become spaces
                self.buffer
                    .extend(data.chars().map(|c| if c.is_control() { ' ' } else { c }));
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Submit => Some(SearchEvent::Done),
            TuiEvent::Escape => {
                self.buffer.clear();
                Some(SearchEvent::Cancel)
            }
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" / Search ");

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let max_x = area.x.saturating_add(area.width.saturating_sub(2));
            let typed = u16::try_from(self.buffer.width()).unwrap_or(u16::MAX);
            let x = area.x.saturating_add(1).saturating_add(typed).min(max_x);
            frame.set_cursor_position(Position::new(x, area.y.saturating_add(1)));
        }
    }
}
