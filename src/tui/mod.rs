//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Background Work
//!
//! `update()` never does I/O. It returns an `Effect`, and `run_effect` turns
//! that into a `tokio::spawn`ed task that reports back by sending an
//! `Action` over an mpsc channel. The loop drains that channel every
//! iteration.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (wheel spinning, fetches in flight): draws every ~50ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resize or
//!   background results.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use futures::future::join_all;

use crate::Tab;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Detail, Services, WheelPhase};
use crate::core::wheel::{SpinPlan, resolve_plan};
use crate::firebase::{AssetResolver, DocumentStore, FirebaseStorageResolver, FirestoreStore};
use crate::recipes::{CocktailDbProvider, RecipeProvider, Spirit, fetch_catalog, fetch_random};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DrinkListEvent, DrinkListState, HomeEvent, HomeState, SearchBox, SearchEvent,
    SpiritMenuEvent, SpiritMenuState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Single-drink fetches and spin lookups give up after this long.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Modal input mode for the A-Z tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive the list: letters jump, arrows move. `/` switches to Input.
    Cursor,
    /// Keys edit the search box. Enter or Esc switches back to Cursor.
    Input,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub home: HomeState,
    pub menu: SpiritMenuState,
    /// List of drinks for the opened spirit.
    pub spirit_list: DrinkListState,
    /// The A-Z list.
    pub drink_list: DrinkListState,
    pub search: SearchBox,
    pub input_mode: InputMode,
    pub detail_scroll: u16,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            home: HomeState::new(),
            menu: SpiritMenuState::new(),
            spirit_list: DrinkListState::new(),
            drink_list: DrinkListState::new(),
            search: SearchBox::new(),
            input_mode: InputMode::Cursor,
            detail_scroll: 0,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Release events are filtered in event.rs; terminals without the
        // protocol ignore the flags
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

/// Build the recipe provider and, when configured, the Firebase clients.
pub fn build_services(config: &ResolvedConfig) -> Services {
    let recipes: Arc<dyn RecipeProvider> = Arc::new(CocktailDbProvider::new(
        Some(config.cocktaildb_base_url.clone()),
        Some(config.cocktaildb_api_key.clone()),
    ));

    let store: Option<Arc<dyn DocumentStore>> = match &config.firebase_project_id {
        Some(project_id) => match FirestoreStore::new(
            Some(config.firestore_base_url.clone()),
            project_id.clone(),
            config.firebase_api_key.clone(),
        ) {
            Ok(store) => Some(Arc::new(store)),
            Err(e) => {
                warn!("Firestore disabled: {}", e);
                None
            }
        },
        None => {
            info!("No Firebase project configured; personality wheel disabled");
            None
        }
    };

    let assets: Option<Arc<dyn AssetResolver>> = match &config.firebase_storage_bucket {
        Some(bucket) => match FirebaseStorageResolver::new(
            Some(config.storage_base_url.clone()),
            bucket.clone(),
        ) {
            Ok(resolver) => Some(Arc::new(resolver)),
            Err(e) => {
                warn!("Firebase Storage disabled: {}", e);
                None
            }
        },
        None => None,
    };

    Services {
        recipes,
        store,
        assets,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let services = build_services(&config);
    let mut app = App::from_config(services, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let effect = update(&mut app, Action::Start);
    run_effect(effect, &app, &tx);

    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        if app.is_spinning() {
            update(&mut app, Action::Tick(now));
        }

        tui.search.focused = app.tab == Tab::List && tui.input_mode == InputMode::Input;

        let animating = app.is_spinning()
            || app.catalog_loading
            || app.recommended_loading
            || matches!(app.detail, Some(Detail::Loading(_)));
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&event, &app, &mut tui) {
                should_quit |= dispatch(&mut app, action, &tx);
            }
        }

        if should_quit {
            break;
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, action, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Apply an action and start whatever I/O it asks for. Returns true on quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let effect = update(app, action);
    run_effect(effect, app, tx)
}

/// Translate a terminal event into an action, updating presentation state
/// along the way.
fn route_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Resize => return None,
        TuiEvent::ForceQuit => return Some(Action::Quit),
        _ => {}
    }

    // The reveal card swallows everything until dismissed
    if matches!(app.wheel, WheelPhase::Revealed(_)) {
        return match event {
            TuiEvent::Submit | TuiEvent::Escape | TuiEvent::InputChar(' ') => {
                Some(Action::DismissReveal)
            }
            _ => None,
        };
    }

    if app.detail.is_some() {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace => {
                tui.detail_scroll = 0;
                return Some(Action::CloseDetail);
            }
            TuiEvent::CursorUp => tui.detail_scroll = tui.detail_scroll.saturating_sub(1),
            TuiEvent::CursorDown => tui.detail_scroll = tui.detail_scroll.saturating_add(1),
            TuiEvent::PageUp => tui.detail_scroll = tui.detail_scroll.saturating_sub(10),
            TuiEvent::PageDown => tui.detail_scroll = tui.detail_scroll.saturating_add(10),
            TuiEvent::NextTab | TuiEvent::PrevTab => {}
            _ => return None,
        }
        if !matches!(event, TuiEvent::NextTab | TuiEvent::PrevTab) {
            return None;
        }
    }

    match event {
        TuiEvent::NextTab => {
            tui.input_mode = InputMode::Cursor;
            tui.detail_scroll = 0;
            return Some(Action::SwitchTab(app.tab.next()));
        }
        TuiEvent::PrevTab => {
            tui.input_mode = InputMode::Cursor;
            tui.detail_scroll = 0;
            return Some(Action::SwitchTab(app.tab.prev()));
        }
        TuiEvent::Refresh => return Some(Action::RefreshCatalog),
        _ => {}
    }

    match app.tab {
        Tab::Home => match tui.home.handle_event(event, &app.recommended)? {
            HomeEvent::Spin => Some(Action::Spin {
                plan: SpinPlan::draw(&app.wheel_config, &mut rand::thread_rng()),
                now: Instant::now(),
            }),
            HomeEvent::Open(id) => Some(Action::OpenDrink(id)),
        },
        Tab::Menu => match &app.spirit_results {
            Some(results) => match tui.spirit_list.handle_event(event, &results.catalog)? {
                DrinkListEvent::Open(id) => Some(Action::OpenDrink(id)),
                DrinkListEvent::Back => Some(Action::CloseSpirit),
            },
            None => match tui.menu.handle_event(event)? {
                SpiritMenuEvent::Open(spirit) => {
                    tui.spirit_list.reset();
                    Some(Action::OpenSpirit(spirit))
                }
            },
        },
        Tab::List => match tui.input_mode {
            InputMode::Input => match tui.search.handle_event(event)? {
                SearchEvent::Changed(query) => {
                    tui.drink_list.reset();
                    Some(Action::SetQuery(query))
                }
                SearchEvent::Done => {
                    tui.input_mode = InputMode::Cursor;
                    None
                }
                SearchEvent::Cancel => {
                    tui.input_mode = InputMode::Cursor;
                    tui.drink_list.reset();
                    Some(Action::SetQuery(String::new()))
                }
            },
            InputMode::Cursor => {
                if matches!(event, TuiEvent::InputChar('/')) {
                    tui.input_mode = InputMode::Input;
                    return None;
                }
                match tui.drink_list.handle_event(event, &app.view)? {
                    DrinkListEvent::Open(id) => Some(Action::OpenDrink(id)),
                    DrinkListEvent::Back => None,
                }
            }
        },
    }
}

/// Start the I/O an effect asks for. Returns true when the app should quit.
fn run_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::LoadAll => {
            spawn_catalog(&app.services, tx.clone());
            spawn_recommended(&app.services, app.recommended_count, tx.clone());
            spawn_spirit_images(&app.services, tx.clone());
        }
        Effect::FetchCatalog => spawn_catalog(&app.services, tx.clone()),
        Effect::FetchSpirit(spirit) => spawn_spirit(&app.services, spirit, tx.clone()),
        Effect::FetchDrink(id) => spawn_drink(&app.services, id, tx.clone()),
        Effect::ResolveSpin(plan) => spawn_spin(&app.services, plan, tx.clone()),
    }
    false
}

fn send(tx: &mpsc::Sender<Action>, action: Action) {
    if let Err(e) = tx.send(action) {
        warn!("Failed to send {:?}: receiver dropped", e.0);
    }
}

fn spawn_catalog(services: &Services, tx: mpsc::Sender<Action>) {
    info!("Spawning catalog fetch");
    let recipes = services.recipes.clone();
    tokio::spawn(async move {
        let result = fetch_catalog(recipes.as_ref())
            .await
            .map_err(|e| e.to_string());
        send(&tx, Action::CatalogLoaded(result));
    });
}

fn spawn_recommended(services: &Services, count: usize, tx: mpsc::Sender<Action>) {
    let recipes = services.recipes.clone();
    tokio::spawn(async move {
        let drinks = fetch_random(recipes.as_ref(), count).await;
        send(&tx, Action::RecommendedLoaded(drinks));
    });
}

fn spawn_spirit_images(services: &Services, tx: mpsc::Sender<Action>) {
    let Some(assets) = services.assets.clone() else {
        debug!("No asset store; skipping menu images");
        return;
    };
    tokio::spawn(async move {
        let results = join_all(Spirit::ALL.into_iter().map(|spirit| {
            let assets = assets.clone();
            async move { (spirit, assets.resolve(&spirit.image_path()).await) }
        }))
        .await;
        for (spirit, result) in results {
            match result {
                Ok(url) => send(&tx, Action::SpiritImageResolved { spirit, url }),
                Err(e) => warn!("Image for {} unavailable: {}", spirit.label(), e),
            }
        }
    });
}

fn spawn_spirit(services: &Services, spirit: Spirit, tx: mpsc::Sender<Action>) {
    info!("Fetching drinks for {}", spirit.label());
    let recipes = services.recipes.clone();
    tokio::spawn(async move {
        let result = spirit
            .fetch_drinks(recipes.as_ref())
            .await
            .map_err(|e| e.to_string());
        send(&tx, Action::SpiritDrinksLoaded { spirit, result });
    });
}

fn spawn_drink(services: &Services, id: String, tx: mpsc::Sender<Action>) {
    let recipes = services.recipes.clone();
    tokio::spawn(async move {
        let result = match tokio::time::timeout(REQUEST_TIMEOUT, recipes.lookup(&id)).await {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(_) => {
                warn!("Lookup for drink {} timed out", id);
                Err("request timed out".to_string())
            }
        };
        send(&tx, Action::DrinkLoaded { id, result });
    });
}

fn spawn_spin(services: &Services, plan: SpinPlan, tx: mpsc::Sender<Action>) {
    let Some(store) = services.store.clone() else {
        send(
            &tx,
            Action::SpinResolved(Err("Firebase is not configured".to_string())),
        );
        return;
    };
    tokio::spawn(async move {
        let result = match tokio::time::timeout(REQUEST_TIMEOUT, resolve_plan(store.as_ref(), &plan))
            .await
        {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(_) => {
                warn!("Spin lookup timed out");
                Err("request timed out".to_string())
            }
        };
        send(&tx, Action::SpinResolved(result));
    });
}
