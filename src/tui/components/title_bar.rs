//! # TitleBar Component
//!
//! Top bar with the tab strip on the left and the status message on the
//! right. Purely presentational: it receives everything as props.
//!
//! An error, when present, replaces the status message and is drawn in red
//! so a failed fetch is not missed.

use crate::Tab;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Tabs;

/// Top bar component showing the tabs and the status message.
pub struct TitleBar {
    pub tab: Tab,
    pub status_message: String,
    pub error: Option<String>,
}

impl TitleBar {
    pub fn new(tab: Tab, status_message: String, error: Option<String>) -> Self {
        Self {
            tab,
            status_message,
            error,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [tabs_area, status_area] =
            Layout::horizontal([Constraint::Length(32), Constraint::Min(0)]).areas(area);

        let selected = Tab::ALL.iter().position(|t| *t == self.tab).unwrap_or(0);
        let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");
        frame.render_widget(tabs, tabs_area);

        let status = match &self.error {
            Some(error) => Span::styled(error.as_str(), Style::default().fg(Color::Red)),
            None => Span::raw(self.status_message.as_str()),
        };
        frame.render_widget(Line::from(status).right_aligned(), status_area);
    }
}
