//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Tab strip plus status message
//! - `DetailView`: Full recipe overlay
//! - `RevealCard`: Personality wheel result overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: Query input for the A-Z list
//! - `DrinkList`: Sorted drink list with a letter sidebar for jumps
//! - `SpiritMenu`: Grid of base spirits
//! - `HomeScreen`: Personality wheel and the recommended row
//!
//! Stateful components use the persistent state + transient wrapper pattern:
//! `XState` lives in `TuiState`, `X<'a>` is built each frame with borrowed
//! state and props.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file, shared layout helpers)
//! ├── title_bar.rs     (Tabs + status)
//! ├── search_box.rs    (A-Z query input)
//! ├── drink_list.rs    (List + letter sidebar)
//! ├── spirit_menu.rs   (Spirit grid)
//! ├── home.rs          (Wheel canvas + recommended row)
//! ├── detail.rs        (Recipe overlay)
//! └── reveal.rs        (Wheel result overlay)
//! ```

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::UnicodeWidthChar;

pub mod detail;
pub mod drink_list;
pub mod home;
pub mod reveal;
pub mod search_box;
pub mod spirit_menu;
mod title_bar;

pub use detail::DetailView;
pub use drink_list::{DrinkList, DrinkListEvent, DrinkListState};
pub use home::{HomeEvent, HomeScreen, HomeState};
pub use reveal::RevealCard;
pub use search_box::{SearchBox, SearchEvent};
pub use spirit_menu::{SpiritMenu, SpiritMenuEvent, SpiritMenuState};
pub use title_bar::TitleBar;

/// A rect of `percent_x` by `percent_y` centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Cut `text` to at most `max_width` terminal columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        // Reserve one column for the ellipsis
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
