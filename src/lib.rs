//! barcart library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod firebase;
pub mod recipes;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Top-level screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Personality wheel and recommended drinks
    #[default]
    Home,
    /// Drinks by base spirit
    Menu,
    /// Every drink, A to Z
    List,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Menu, Tab::List];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Menu => "Menu",
            Tab::List => "A-Z",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Home => Tab::Menu,
            Tab::Menu => Tab::List,
            Tab::List => Tab::Home,
        }
    }

    pub fn prev(self) -> Tab {
        match self {
            Tab::Home => Tab::List,
            Tab::Menu => Tab::Home,
            Tab::List => Tab::Menu,
        }
    }
}
