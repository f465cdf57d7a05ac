//! # Application State
//!
//! Core business state for barcart. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── services: Services            // injected recipe/store/asset handles
//! ├── tab: Tab                      // Home, Menu, List
//! ├── catalog: Catalog              // every drink, sorted + indexed
//! ├── view: Catalog                 // catalog filtered by `query`
//! ├── query: String                 // A-Z search box text
//! ├── recommended: Vec<Drink>       // home screen row
//! ├── spirit_images: HashMap        // resolved menu image URLs
//! ├── spirit_results: Option        // drinks for the opened spirit
//! ├── detail: Option<Detail>        // open drink detail overlay
//! ├── wheel: WheelPhase             // spin state machine
//! ├── status_message: String        // status bar text
//! └── error: Option<String>         // last error worth showing
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::Tab;
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::wheel::{Reveal, WheelConfig};
use crate::firebase::{AssetResolver, DocumentStore};
use crate::recipes::{Drink, RecipeProvider, Spirit};

/// Collaborator handles, built once at startup and shared with background tasks.
#[derive(Clone)]
pub struct Services {
    pub recipes: Arc<dyn RecipeProvider>,
    /// `None` when Firebase isn't configured; the wheel is disabled.
    pub store: Option<Arc<dyn DocumentStore>>,
    /// `None` when Firebase isn't configured; menu images are skipped.
    pub assets: Option<Arc<dyn AssetResolver>>,
}

/// Drinks listed for one spirit on the menu tab.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiritResults {
    pub spirit: Spirit,
    pub loading: bool,
    pub catalog: Catalog,
}

/// The drink detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    Loading(String),
    Loaded(Box<Drink>),
    NotFound(String),
    /// The lookup itself failed (network, timeout, bad response).
    Failed(String),
}

/// Wheel state machine.
///
/// ```text
/// Idle ──Spin──► Spinning ──(elapsed ≥ duration && outcome arrived)──► Revealed
///  ▲                                                                     │
///  └─────────────────────────────DismissReveal───────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum WheelPhase {
    Idle,
    Spinning {
        started: Instant,
        outcome: Option<Result<Reveal, String>>,
    },
    Revealed(Result<Reveal, String>),
}

pub struct App {
    pub services: Services,
    pub tab: Tab,
    pub catalog: Catalog,
    pub view: Catalog,
    pub query: String,
    pub catalog_loading: bool,
    pub recommended: Vec<Drink>,
    pub recommended_loading: bool,
    pub recommended_count: usize,
    pub spirit_images: HashMap<Spirit, String>,
    pub spirit_results: Option<SpiritResults>,
    pub detail: Option<Detail>,
    pub wheel: WheelPhase,
    pub wheel_config: WheelConfig,
    /// Completed spins; drives the wheel's resting angle.
    pub spins: u32,
    pub status_message: String,
    pub error: Option<String>,
}

impl App {
    pub fn new(services: Services) -> Self {
        Self {
            services,
            tab: Tab::default(),
            catalog: Catalog::default(),
            view: Catalog::default(),
            query: String::new(),
            catalog_loading: false,
            recommended: Vec::new(),
            recommended_loading: false,
            recommended_count: 5,
            spirit_images: HashMap::new(),
            spirit_results: None,
            detail: None,
            wheel: WheelPhase::Idle,
            wheel_config: WheelConfig::default(),
            spins: 0,
            status_message: String::from("Welcome to barcart!"),
            error: None,
        }
    }

    /// Create an App seeded from resolved configuration.
    pub fn from_config(services: Services, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(services);
        app.tab = config.start_tab;
        app.recommended_count = config.recommended_count;
        app.wheel_config = config.wheel.clone();
        app
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.wheel, WheelPhase::Spinning { .. })
    }

    pub fn wheel_enabled(&self) -> bool {
        self.services.store.is_some()
    }
}
