//! # SpiritMenu Component
//!
//! Two-column grid of the base spirits. Enter opens the drinks made with the
//! selected spirit. Each tile shows the resolved button image link when the
//! asset store answered, since a terminal can't show the picture itself.

use std::collections::HashMap;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::recipes::Spirit;
use crate::tui::component::Component;
use crate::tui::components::truncate_to_width;
use crate::tui::event::TuiEvent;

const COLUMNS: usize = 2;

/// Persistent state for the spirit grid.
#[derive(Debug, Default)]
pub struct SpiritMenuState {
    pub selected: usize,
}

/// Events emitted by the spirit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiritMenuEvent {
    Open(Spirit),
}

impl SpiritMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_spirit(&self) -> Spirit {
        Spirit::ALL[self.selected.min(Spirit::ALL.len() - 1)]
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<SpiritMenuEvent> {
        let last = Spirit::ALL.len() - 1;
        match event {
            TuiEvent::CursorLeft => self.selected = self.selected.saturating_sub(1),
            TuiEvent::CursorRight => self.selected = (self.selected + 1).min(last),
            TuiEvent::CursorUp => {
                if self.selected >= COLUMNS {
                    self.selected -= COLUMNS;
                }
            }
            TuiEvent::CursorDown => {
                if self.selected + COLUMNS <= last {
                    self.selected += COLUMNS;
                }
            }
            TuiEvent::Submit => return Some(SpiritMenuEvent::Open(self.selected_spirit())),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the spirit grid.
pub struct SpiritMenu<'a> {
    state: &'a SpiritMenuState,
    images: &'a HashMap<Spirit, String>,
}

impl<'a> SpiritMenu<'a> {
    pub fn new(state: &'a SpiritMenuState, images: &'a HashMap<Spirit, String>) -> Self {
        Self { state, images }
    }

    fn render_tile(&self, frame: &mut Frame, area: Rect, spirit: Spirit, selected: bool) {
        let border = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default().borders(Borders::ALL).border_style(border);

        let inner_width = area.width.saturating_sub(2) as usize;
        let image_line = match self.images.get(&spirit) {
            Some(url) => Span::styled(
                truncate_to_width(url, inner_width),
                Style::default().fg(Color::Blue),
            ),
            None => Span::styled("no image", Style::default().fg(Color::DarkGray)),
        };
        let mut label_style = Style::default().add_modifier(Modifier::BOLD);
        if selected {
            label_style = label_style.fg(Color::Yellow);
        }

        let tile = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(spirit.label(), label_style)),
            Line::from(image_line),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(tile, area);
    }
}

impl Component for SpiritMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Spirit::ALL.len().div_ceil(COLUMNS);
        let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);

        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                .split(*row_area);
            for (col, cell) in cells.iter().enumerate() {
                let i = row * COLUMNS + col;
                if let Some(&spirit) = Spirit::ALL.get(i) {
                    self.render_tile(frame, *cell, spirit, i == self.state.selected);
                }
            }
        }
    }
}
