//! # DetailView Component
//!
//! Full recipe overlay: name, image link, category, glass, ingredient list
//! with measures and the wrapped instructions. Up/Down scroll, Esc closes.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::state::Detail;
use crate::recipes::Drink;
use crate::tui::component::Component;
use crate::tui::components::centered_rect;

/// Transient render wrapper for the detail overlay.
pub struct DetailView<'a> {
    pub detail: &'a Detail,
    /// Lines scrolled off the top. Clamped on render so the last line of the
    /// recipe stays on screen.
    pub scroll: &'a mut u16,
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field(label: &str, value: Option<&str>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::raw(value.unwrap_or("Unknown").to_string()),
    ])
}

/// Recipe body, with instructions wrapped to `width` columns.
pub fn detail_lines(drink: &Drink, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(thumb) = &drink.thumbnail {
        lines.push(Line::from(Span::styled(
            thumb.clone(),
            Style::default().fg(Color::Blue),
        )));
        lines.push(Line::default());
    }

    lines.push(field("Category", drink.category.as_deref()));
    lines.push(field("Glass Type", drink.glass.as_deref()));
    if let Some(alcoholic) = &drink.alcoholic {
        lines.push(field("Type", Some(alcoholic)));
    }
    lines.push(Line::default());

    lines.push(heading("Ingredients"));
    let ingredients = drink.ingredients();
    if ingredients.is_empty() {
        lines.push(Line::from("  (none listed)"));
    }
    for ingredient in ingredients {
        let text = match ingredient.measure {
            Some(measure) => format!("  - {} {}", measure, ingredient.name),
            None => format!("  - {}", ingredient.name),
        };
        lines.push(Line::from(text));
    }
    lines.push(Line::default());

    lines.push(heading("Instructions"));
    let instructions = drink
        .instructions
        .as_deref()
        .unwrap_or("No instructions available.");
    for wrapped in textwrap::wrap(instructions, width.max(10)) {
        lines.push(Line::from(wrapped.into_owned()));
    }

    lines
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(80, 90, area);
        frame.render_widget(Clear, overlay);

        let title = match self.detail {
            Detail::Loaded(drink) => format!(" {} ", drink.display_name()),
            _ => " Drink ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(title)
            .title_bottom(Line::from(" ↑↓ Scroll  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let paragraph = match self.detail {
            Detail::Loading(_) => Paragraph::new("Loading drink details...")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            Detail::NotFound(_) => Paragraph::new("Drink not found.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            Detail::Failed(e) => Paragraph::new(vec![
                Line::from("Could not load this drink."),
                Line::from(Span::styled(e.clone(), Style::default().fg(Color::Red))),
            ])
            .alignment(Alignment::Center),
            Detail::Loaded(drink) => {
                // Borders plus horizontal padding
                let width = overlay.width.saturating_sub(4) as usize;
                let lines = detail_lines(drink, width);
                let visible = usize::from(overlay.height.saturating_sub(2));
                let max_scroll = u16::try_from(lines.len().saturating_sub(visible))
                    .unwrap_or(u16::MAX);
                *self.scroll = (*self.scroll).min(max_scroll);
                Paragraph::new(lines).scroll((*self.scroll, 0))
            }
        };
        frame.render_widget(paragraph.block(block), overlay);
    }
}
