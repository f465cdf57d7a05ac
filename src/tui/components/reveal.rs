//! # RevealCard Component
//!
//! Overlay showing the drink personality after a spin. Shows a loading card
//! when the animation finished but the store hasn't answered yet.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::core::wheel::Reveal;
use crate::tui::component::Component;
use crate::tui::components::centered_rect;

pub struct RevealCard<'a> {
    /// `None` while waiting for the store.
    pub outcome: Option<&'a Result<Reveal, String>>,
}

fn reveal_lines(reveal: &Reveal) -> Vec<Line<'static>> {
    let title = reveal.title();
    let mut lines = vec![
        Line::from(Span::styled(
            "Your drink personality",
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        Line::from(Span::styled(
            if title.is_empty() {
                "Mystery Drink".to_string()
            } else {
                title
            },
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    if reveal.ingredients.is_empty() {
        lines.push(Line::from("No ingredients this time."));
    } else {
        lines.push(Line::from("Made with:"));
        lines.extend(
            reveal
                .ingredients
                .iter()
                .map(|i| Line::from(format!("- {i}"))),
        );
    }
    lines
}

impl Component for RevealCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 60, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Spin Result ")
            .title_bottom(Line::from(" Enter Close ").centered());

        let paragraph = match self.outcome {
            None => Paragraph::new("Loading...").style(Style::default().fg(Color::DarkGray)),
            Some(Ok(reveal)) => Paragraph::new(reveal_lines(reveal)),
            Some(Err(e)) => Paragraph::new(vec![
                Line::from(Span::styled(
                    "The wheel got stuck.",
                    Style::default().fg(Color::Red),
                )),
                Line::default(),
                Line::from(e.clone()),
            ]),
        };
        frame.render_widget(
            paragraph
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            overlay,
        );
    }
}
