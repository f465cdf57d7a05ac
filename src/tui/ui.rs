use std::time::Instant;

use crate::Tab;
use crate::core::state::{App, WheelPhase};
use crate::tui::component::Component;
use crate::tui::components::home::wheel_angle;
use crate::tui::components::{
    DetailView, DrinkList, HomeScreen, RevealCard, SpiritMenu, TitleBar,
};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

/// Row heights for the two list flavors.
const LIST_ROW_HEIGHT: u16 = 2;
const SPIRIT_ROW_HEIGHT: u16 = 1;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.tab, app.status_message.clone(), app.error.clone())
        .render(frame, title_area);

    match app.tab {
        Tab::Home => draw_home(frame, main_area, app, tui, now),
        Tab::Menu => draw_menu(frame, main_area, app, tui),
        Tab::List => draw_list(frame, main_area, app, tui),
    }

    // Overlays, topmost last
    if let Some(detail) = &app.detail {
        DetailView {
            detail,
            scroll: &mut tui.detail_scroll,
        }
        .render(frame, main_area);
    }
    match &app.wheel {
        WheelPhase::Revealed(outcome) => {
            RevealCard {
                outcome: Some(outcome),
            }
            .render(frame, main_area);
        }
        WheelPhase::Spinning { started, .. }
            if now.saturating_duration_since(*started) >= app.wheel_config.spin_duration =>
        {
            RevealCard { outcome: None }.render(frame, main_area);
        }
        _ => {}
    }

    frame.render_widget(
        Paragraph::new(help_text(app, tui)).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_home(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState, now: Instant) {
    HomeScreen {
        state: &tui.home,
        recommended: &app.recommended,
        recommended_loading: app.recommended_loading,
        angle: wheel_angle(&app.wheel, app.spins, app.wheel_config.spin_duration, now),
        segments: app.wheel_config.segments,
        wheel_enabled: app.wheel_enabled(),
        spinning: app.is_spinning(),
    }
    .render(frame, area);
}

fn draw_menu(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    match &app.spirit_results {
        Some(results) => DrinkList::new(
            &mut tui.spirit_list,
            &results.catalog,
            format!("{} Drinks", results.spirit.label()),
            SPIRIT_ROW_HEIGHT,
            results.loading,
        )
        .render(frame, area),
        None => SpiritMenu::new(&tui.menu, &app.spirit_images).render(frame, area),
    }
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [search_area, list_area] = Layout::vertical([Length(3), Min(0)]).areas(area);

    tui.search.render(frame, search_area);
    DrinkList::new(
        &mut tui.drink_list,
        &app.view,
        "All Drinks",
        LIST_ROW_HEIGHT,
        app.catalog_loading,
    )
    .render(frame, list_area);
}

fn help_text(app: &App, tui: &TuiState) -> &'static str {
    if matches!(app.wheel, WheelPhase::Revealed(_)) {
        return " Enter Close";
    }
    if app.detail.is_some() {
        return " ↑↓ Scroll  Esc Close";
    }
    match app.tab {
        Tab::Home => " Space Spin  ←→ Pick  Enter Open  Tab Next screen  Ctrl+C Quit",
        Tab::Menu if app.spirit_results.is_some() => {
            " A-Z Jump  ↑↓ Move  Enter Open  Esc Back  Ctrl+C Quit"
        }
        Tab::Menu => " ←→↑↓ Pick  Enter Open  Tab Next screen  Ctrl+C Quit",
        Tab::List if tui.input_mode == InputMode::Input => " Type to filter  Enter Done  Esc Clear",
        Tab::List => " / Search  A-Z Jump  ↑↓ Move  Enter Open  Ctrl+R Reload  Ctrl+C Quit",
    }
}
