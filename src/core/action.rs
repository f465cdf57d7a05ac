//! # Actions
//!
//! Everything that can happen in barcart becomes an `Action`.
//! User picks a letter? The TUI scrolls. User opens a drink? That's
//! `Action::OpenDrink(id)`. The recipe API answers? `Action::DrinkLoaded`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller should
//! start. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Instant;

use log::{debug, info, warn};

use crate::Tab;
use crate::core::catalog::Catalog;
use crate::core::index::Entry;
use crate::core::state::{App, Detail, SpiritResults, WheelPhase};
use crate::core::wheel::{Reveal, SpinPlan};
use crate::recipes::{Drink, DrinkSummary, Spirit};

#[derive(Debug)]
pub enum Action {
    Quit,
    /// First frame: kick off the startup fetches.
    Start,
    SwitchTab(Tab),
    RefreshCatalog,
    CatalogLoaded(Result<Catalog, String>),
    SetQuery(String),
    RecommendedLoaded(Vec<Drink>),
    SpiritImageResolved { spirit: Spirit, url: String },
    OpenSpirit(Spirit),
    SpiritDrinksLoaded {
        spirit: Spirit,
        result: Result<Vec<DrinkSummary>, String>,
    },
    CloseSpirit,
    OpenDrink(String),
    DrinkLoaded {
        id: String,
        result: Result<Option<Drink>, String>,
    },
    CloseDetail,
    Spin { plan: SpinPlan, now: Instant },
    SpinResolved(Result<Reveal, String>),
    Tick(Instant),
    DismissReveal,
}

/// I/O requested by `update()`, carried out by the TUI loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Startup: catalog, recommended row and menu images.
    LoadAll,
    FetchCatalog,
    FetchSpirit(Spirit),
    FetchDrink(String),
    ResolveSpin(SpinPlan),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,
        Action::Start => {
            app.catalog_loading = true;
            app.recommended_loading = true;
            app.status_message = "Loading drinks...".to_string();
            Effect::LoadAll
        }
        Action::SwitchTab(tab) => {
            app.tab = tab;
            app.detail = None;
            app.error = None;
            Effect::None
        }
        Action::RefreshCatalog => {
            if app.catalog_loading {
                return Effect::None;
            }
            app.catalog_loading = true;
            app.status_message = "Refreshing drinks...".to_string();
            Effect::FetchCatalog
        }
        Action::CatalogLoaded(Ok(catalog)) => {
            info!("Catalog loaded: {} drinks", catalog.len());
            app.catalog_loading = false;
            app.error = None;
            app.status_message = format!("{} drinks", catalog.len());
            // List and index are swapped in together; the filtered view is
            // re-derived from the new catalog before anyone reads it.
            app.view = catalog.filter(&app.query);
            app.catalog = catalog;
            Effect::None
        }
        Action::CatalogLoaded(Err(e)) => {
            warn!("Catalog load failed: {}", e);
            app.catalog_loading = false;
            app.error = Some(format!("Could not load drinks: {e}"));
            app.status_message = "Catalog unavailable".to_string();
            Effect::None
        }
        Action::SetQuery(query) => {
            app.view = app.catalog.filter(&query);
            debug!("Query {:?} matches {} drinks", query, app.view.len());
            app.query = query;
            Effect::None
        }
        Action::RecommendedLoaded(drinks) => {
            app.recommended_loading = false;
            app.recommended = drinks;
            Effect::None
        }
        Action::SpiritImageResolved { spirit, url } => {
            app.spirit_images.insert(spirit, url);
            Effect::None
        }
        Action::OpenSpirit(spirit) => {
            app.spirit_results = Some(SpiritResults {
                spirit,
                loading: true,
                catalog: Catalog::default(),
            });
            Effect::FetchSpirit(spirit)
        }
        Action::SpiritDrinksLoaded { spirit, result } => {
            // Ignore answers for a spirit the user already left
            let Some(results) = app
                .spirit_results
                .as_mut()
                .filter(|r| r.spirit == spirit)
            else {
                debug!("Dropping stale results for {:?}", spirit);
                return Effect::None;
            };
            results.loading = false;
            match result {
                Ok(drinks) => {
                    results.catalog = Catalog::new(drinks.iter().map(Entry::from).collect());
                    app.error = None;
                    app.status_message =
                        format!("{} drinks with {}", results.catalog.len(), spirit.label());
                }
                Err(e) => {
                    warn!("Spirit fetch for {} failed: {}", spirit.label(), e);
                    app.error = Some(format!("Could not load {} drinks: {e}", spirit.label()));
                }
            }
            Effect::None
        }
        Action::CloseSpirit => {
            app.spirit_results = None;
            Effect::None
        }
        Action::OpenDrink(id) => {
            app.detail = Some(Detail::Loading(id.clone()));
            Effect::FetchDrink(id)
        }
        Action::DrinkLoaded { id, result } => {
            if !matches!(&app.detail, Some(Detail::Loading(open)) if *open == id) {
                debug!("Dropping stale detail for {}", id);
                return Effect::None;
            }
            app.detail = match result {
                Ok(found) => {
                    app.error = None;
                    match found {
                        Some(drink) => Some(Detail::Loaded(Box::new(drink))),
                        None => Some(Detail::NotFound(id)),
                    }
                }
                Err(e) => {
                    warn!("Drink {} failed to load: {}", id, e);
                    app.error = Some(format!("Could not load drink: {e}"));
                    Some(Detail::Failed(e))
                }
            };
            Effect::None
        }
        Action::CloseDetail => {
            app.detail = None;
            Effect::None
        }
        Action::Spin { plan, now } => {
            if !app.wheel_enabled() {
                app.status_message = "Wheel unavailable: Firebase is not configured".to_string();
                return Effect::None;
            }
            if app.is_spinning() {
                return Effect::None;
            }
            app.wheel = WheelPhase::Spinning {
                started: now,
                outcome: None,
            };
            Effect::ResolveSpin(plan)
        }
        Action::SpinResolved(result) => {
            if let WheelPhase::Spinning { outcome, .. } = &mut app.wheel {
                *outcome = Some(result);
            }
            Effect::None
        }
        Action::Tick(now) => {
            let finished = match &app.wheel {
                WheelPhase::Spinning {
                    started,
                    outcome: Some(_),
                } => now.saturating_duration_since(*started) >= app.wheel_config.spin_duration,
                _ => false,
            };
            if finished
                && let WheelPhase::Spinning {
                    outcome: Some(outcome),
                    ..
                } = std::mem::replace(&mut app.wheel, WheelPhase::Idle)
            {
                app.spins += 1;
                app.wheel = WheelPhase::Revealed(outcome);
            }
            Effect::None
        }
        Action::DismissReveal => {
            if matches!(app.wheel, WheelPhase::Revealed(_)) {
                app.wheel = WheelPhase::Idle;
            }
            Effect::None
        }
    }
}
