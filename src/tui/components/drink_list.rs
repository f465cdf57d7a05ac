//! # DrinkList Component
//!
//! Sorted drink list with a letter sidebar. One component serves the A-Z
//! tab and the per-spirit results on the menu tab; the only difference
//! between the two is the row height.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DrinkListState` lives in `TuiState` (one per list)
//! - `DrinkList` is created each frame with borrowed state and catalog
//!
//! Typing a letter jumps to the first drink filed under it, using the
//! catalog's letter index. A letter with no drinks leaves the viewport
//! where it is.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::core::catalog::Catalog;
use crate::core::index::{OTHER_KEY, fold_key};
use crate::tui::component::Component;
use crate::tui::components::truncate_to_width;
use crate::tui::event::TuiEvent;

/// Sidebar keys in display order.
const SIDEBAR_KEYS: [char; 27] = [
    OTHER_KEY, 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const SIDEBAR_WIDTH: u16 = 5;

/// Events emitted by the drink list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrinkListEvent {
    /// Enter on a row: open the drink with this id.
    Open(String),
    /// Esc: leave the list.
    Back,
}

/// Persistent state for a drink list.
#[derive(Debug, Default)]
pub struct DrinkListState {
    pub list_state: ListState,
    /// Key of the last successful jump, highlighted in the sidebar.
    pub active_letter: Option<char>,
    /// Rows that fit on screen, cached during render for paging.
    viewport_rows: usize,
}

impl DrinkListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, e.g. after the list contents were replaced.
    pub fn reset(&mut self) {
        self.list_state = ListState::default();
        self.active_letter = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Scroll so the first drink under `letter` sits at the top and select it.
    ///
    /// Returns `false` and leaves the viewport untouched when the letter has
    /// no drinks.
    pub fn jump_to(&mut self, letter: char, catalog: &Catalog) -> bool {
        let Some(target) = catalog.jump_target(letter, catalog.len()) else {
            log::debug!("No drinks under {:?}; jump ignored", letter);
            return false;
        };
        self.list_state.select(Some(target));
        *self.list_state.offset_mut() = target;
        self.active_letter = Some(fold_key(letter));
        true
    }

    /// Keep the selection inside a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        match (len, self.list_state.selected()) {
            (0, _) => self.list_state.select(None),
            (_, None) => self.list_state.select(Some(0)),
            (len, Some(i)) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
        if len > 0 && self.list_state.offset() >= len {
            *self.list_state.offset_mut() = len - 1;
        }
    }

    fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.list_state.select(Some(next));
    }

    /// Handle a key event against the catalog currently on screen.
    pub fn handle_event(&mut self, event: &TuiEvent, catalog: &Catalog) -> Option<DrinkListEvent> {
        let len = catalog.len();
        let page = self.viewport_rows.max(1) as isize;
        match event {
            TuiEvent::CursorUp => self.move_by(-1, len),
            TuiEvent::CursorDown => self.move_by(1, len),
            TuiEvent::PageUp => self.move_by(-page, len),
            TuiEvent::PageDown => self.move_by(page, len),
            TuiEvent::Home => self.move_by(isize::MIN / 2, len),
            TuiEvent::End => self.move_by(isize::MAX / 2, len),
            TuiEvent::InputChar(c) if c.is_alphabetic() || *c == OTHER_KEY => {
                self.jump_to(*c, catalog);
            }
            TuiEvent::Submit => {
                return self
                    .list_state
                    .selected()
                    .and_then(|i| catalog.get(i))
                    .map(|entry| DrinkListEvent::Open(entry.id.clone()));
            }
            TuiEvent::Escape => return Some(DrinkListEvent::Back),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for a drink list.
pub struct DrinkList<'a> {
    state: &'a mut DrinkListState,
    catalog: &'a Catalog,
    title: String,
    /// Terminal rows per drink; 2 or more adds the category line.
    row_height: u16,
    loading: bool,
}

impl<'a> DrinkList<'a> {
    pub fn new(
        state: &'a mut DrinkListState,
        catalog: &'a Catalog,
        title: impl Into<String>,
        row_height: u16,
        loading: bool,
    ) -> Self {
        Self {
            state,
            catalog,
            title: title.into(),
            row_height: row_height.max(1),
            loading,
        }
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let index = self.catalog.index();
        let lines: Vec<Line> = SIDEBAR_KEYS
            .iter()
            .map(|&key| {
                let style = if self.state.active_letter == Some(key) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else if index.contains(key) {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(Span::styled(key.to_ascii_uppercase().to_string(), style))
            })
            .collect();

        let sidebar = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(sidebar, area);
    }
}

impl Component for DrinkList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [list_area, sidebar_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(SIDEBAR_WIDTH)])
                .areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title))
            .title_bottom(Line::from(format!(" {} ", self.catalog.len())).right_aligned());

        let inner_height = list_area.height.saturating_sub(2);
        self.state.viewport_rows = (inner_height / self.row_height) as usize;
        self.state.clamp(self.catalog.len());

        if self.catalog.is_empty() {
            let message = if self.loading {
                "Loading drinks..."
            } else {
                "No drinks found"
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, list_area);
            self.render_sidebar(frame, sidebar_area);
            return;
        }

        // Borders plus the highlight symbol
        let label_width = list_area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .catalog
            .entries()
            .iter()
            .map(|entry| {
                let mut lines = vec![Line::from(Span::styled(
                    truncate_to_width(&entry.label, label_width),
                    Style::default().fg(Color::White),
                ))];
                if self.row_height >= 2 {
                    let category = entry.category.as_deref().unwrap_or("");
                    lines.push(Line::from(Span::styled(
                        truncate_to_width(category, label_width),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                while lines.len() < self.row_height as usize {
                    lines.push(Line::default());
                }
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);

        self.render_sidebar(frame, sidebar_area);
    }
}
