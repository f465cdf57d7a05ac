//! # HomeScreen Component
//!
//! The personality wheel drawn on a braille canvas, with the recommended
//! drinks row beneath it. Space spins; Left/Right pick a recommendation and
//! Enter opens it.
//!
//! The wheel angle is a pure function of the spin phase and the clock, so
//! the animation needs no state of its own.

use std::f64::consts::TAU;
use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::state::WheelPhase;
use crate::recipes::Drink;
use crate::tui::component::Component;
use crate::tui::components::truncate_to_width;
use crate::tui::event::TuiEvent;

/// Wheel rotation in radians for the current frame.
///
/// While spinning the wheel turns once per `duration`, and keeps turning if
/// the reveal data is late. At rest it sits where the last spin ended.
pub fn wheel_angle(phase: &WheelPhase, spins: u32, duration: Duration, now: Instant) -> f64 {
    let progress = match phase {
        WheelPhase::Spinning { started, .. } => {
            if duration.is_zero() {
                1.0
            } else {
                now.saturating_duration_since(*started).as_secs_f64() / duration.as_secs_f64()
            }
        }
        _ => 0.0,
    };
    ((spins as f64 + progress) * TAU).rem_euclid(TAU)
}

/// Persistent state for the home screen.
#[derive(Debug, Default)]
pub struct HomeState {
    /// Selected card in the recommended row.
    pub selected: usize,
}

/// Events emitted by the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEvent {
    Spin,
    Open(String),
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &TuiEvent, recommended: &[Drink]) -> Option<HomeEvent> {
        match event {
            TuiEvent::InputChar(' ' | 's') => return Some(HomeEvent::Spin),
            TuiEvent::CursorLeft => self.selected = self.selected.saturating_sub(1),
            TuiEvent::CursorRight if !recommended.is_empty() => {
                self.selected = (self.selected + 1).min(recommended.len() - 1);
            }
            TuiEvent::Submit => {
                return recommended
                    .get(self.selected)
                    .map(|drink| HomeEvent::Open(drink.id.clone()));
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the home screen.
pub struct HomeScreen<'a> {
    pub state: &'a HomeState,
    pub recommended: &'a [Drink],
    pub recommended_loading: bool,
    pub angle: f64,
    pub segments: u16,
    pub wheel_enabled: bool,
    pub spinning: bool,
}

impl HomeScreen<'_> {
    fn render_wheel(&self, frame: &mut Frame, area: Rect) {
        if !self.wheel_enabled {
            let notice = Paragraph::new(
                "Wheel unavailable.\nSet FIREBASE_PROJECT_ID to enable the personality wheel.",
            )
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
            frame.render_widget(notice, area);
            return;
        }

        // Terminal cells are about twice as tall as wide
        let width = (area.height * 2).min(area.width);
        let [wheel_area] = Layout::horizontal([Constraint::Length(width)])
            .flex(ratatui::layout::Flex::Center)
            .areas(area);

        let segments = self.segments.max(1);
        let angle = self.angle;
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.2, 1.2])
            .y_bounds([-1.2, 1.2])
            .paint(move |ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 1.0,
                    color: Color::Yellow,
                });
                for i in 0..segments {
                    let a = angle + f64::from(i) * TAU / f64::from(segments);
                    let color = if i % 2 == 0 {
                        Color::White
                    } else {
                        Color::LightYellow
                    };
                    ctx.draw(&CanvasLine::new(0.0, 0.0, a.cos(), a.sin(), color));
                }
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 0.1,
                    color: Color::White,
                });
                // Fixed pointer at twelve o'clock
                ctx.draw(&CanvasLine::new(-0.08, 1.15, 0.0, 1.02, Color::Red));
                ctx.draw(&CanvasLine::new(0.08, 1.15, 0.0, 1.02, Color::Red));
            });
        frame.render_widget(canvas, wheel_area);
    }

    fn render_recommended(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Recommended ");

        if self.recommended.is_empty() {
            let message = if self.recommended_loading {
                "Loading..."
            } else {
                "No recommendations right now"
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let count = self.recommended.len() as u32;
        let cards = Layout::horizontal(vec![Constraint::Ratio(1, count); count as usize]).split(inner);
        for (i, (drink, card)) in self.recommended.iter().zip(cards.iter()).enumerate() {
            let selected = i == self.state.selected;
            let width = card.width.saturating_sub(2) as usize;
            let mut name_style = Style::default().add_modifier(Modifier::BOLD);
            if selected {
                name_style = name_style.fg(Color::Yellow);
            }
            let lines = vec![
                Line::from(Span::styled(
                    truncate_to_width(drink.display_name(), width),
                    name_style,
                )),
                Line::from(Span::styled(
                    truncate_to_width(drink.category.as_deref().unwrap_or(""), width),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            let border = if selected {
                Color::Yellow
            } else {
                Color::DarkGray
            };
            let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
            frame.render_widget(paragraph, *card);
        }
    }
}

impl Component for HomeScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [wheel_area, hint_area, recommended_area] =
            Layout::vertical([Min(0), Length(1), Length(6)]).areas(area);

        self.render_wheel(frame, wheel_area);

        let hint = if self.spinning {
            "Spinning..."
        } else {
            "[Space] Spin the Wheel"
        };
        frame.render_widget(
            Paragraph::new(hint)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center),
            hint_area,
        );

        self.render_recommended(frame, recommended_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::drink;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_angle_at_rest_is_zero() {
        let now = Instant::now();
        assert_eq!(wheel_angle(&WheelPhase::Idle, 0, Duration::from_secs(2), now), 0.0);
        // Whole turns land back on the same spot
        let after_spins = wheel_angle(&WheelPhase::Idle, 3, Duration::from_secs(2), now);
        assert!(after_spins < 1e-9 || TAU - after_spins < 1e-9);
    }

    #[test]
    fn test_angle_halfway_through_spin() {
        let started = Instant::now();
        let phase = WheelPhase::Spinning {
            started,
            outcome: None,
        };
        let angle = wheel_angle(
            &phase,
            0,
            Duration::from_millis(2000),
            started + Duration::from_millis(1000),
        );
        assert!((angle - TAU / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_keeps_turning_past_duration() {
        let started = Instant::now();
        let phase = WheelPhase::Spinning {
            started,
            outcome: None,
        };
        let angle = wheel_angle(
            &phase,
            0,
            Duration::from_millis(2000),
            started + Duration::from_millis(2500),
        );
        assert!((angle - TAU / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_space_spins_and_enter_opens() {
        let recommended = vec![drink("1", "Mojito"), drink("2", "Negroni")];
        let mut home = HomeState::new();
        assert_eq!(
            home.handle_event(&TuiEvent::InputChar(' '), &recommended),
            Some(HomeEvent::Spin)
        );
        home.handle_event(&TuiEvent::CursorRight, &recommended);
        home.handle_event(&TuiEvent::CursorRight, &recommended);
        assert_eq!(
            home.handle_event(&TuiEvent::Submit, &recommended),
            Some(HomeEvent::Open("2".to_string()))
        );
    }

    #[test]
    fn test_render_home_screen() {
        let recommended = vec![drink("1", "Mojito"), drink("2", "Negroni")];
        let home = HomeState::new();
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                HomeScreen {
                    state: &home,
                    recommended: &recommended,
                    recommended_loading: false,
                    angle: 0.0,
                    segments: 12,
                    wheel_enabled: true,
                    spinning: false,
                }
                .render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Spin the Wheel"));
        assert!(text.contains("Mojito"));
        assert!(text.contains("Negroni"));
    }

    #[test]
    fn test_render_without_firebase_explains() {
        let home = HomeState::new();
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                HomeScreen {
                    state: &home,
                    recommended: &[],
                    recommended_loading: true,
                    angle: 0.0,
                    segments: 12,
                    wheel_enabled: false,
                    spinning: false,
                }
                .render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Wheel unavailable."));
        assert!(text.contains("Loading..."));
    }
}
