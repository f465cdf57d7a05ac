//! # Personality Wheel
//!
//! Spinning the wheel draws a random adjective, a random name, and a handful
//! of random ingredients from the document store and combines them into a
//! "drink personality" such as *Fearless Captain* with gin, mint and lime.
//!
//! ```text
//!   SpinPlan::draw(rng)          pure, seeded in tests
//!          │
//!          ▼
//!   resolve_plan(store, plan)    adjective ┐
//!                                name      ├ fetched concurrently
//!                                ingredients┘
//!          │
//!          ▼
//!   Reveal { title(), ingredients }
//! ```
//!
//! The reveal appears once the spin animation has run for the full
//! `spin_duration` *and* the data has arrived, whichever is later.

use std::ops::RangeInclusive;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, warn};
use rand::Rng;

use crate::firebase::{DocumentStore, FirebaseError};

pub const ADJECTIVES: &str = "adjectives";
pub const NAMES: &str = "names";
pub const INGREDIENTS: &str = "ingredients";

/// Field every wheel document stores its text in.
const NAME_FIELD: &str = "name";

#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    /// Documents `1..=adjective_count` exist in `adjectives`.
    pub adjective_count: u32,
    pub name_count: u32,
    pub ingredient_pool: u32,
    /// How many ingredient draws a spin makes.
    pub ingredient_draws: RangeInclusive<u32>,
    pub spin_duration: Duration,
    pub segments: u16,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            adjective_count: 13,
            name_count: 8,
            ingredient_pool: 18,
            ingredient_draws: 3..=6,
            spin_duration: Duration::from_millis(2000),
            segments: 12,
        }
    }
}

/// Document ids chosen for one spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinPlan {
    pub adjective_id: u32,
    pub name_id: u32,
    /// May repeat; repeats collapse when resolved.
    pub ingredient_ids: Vec<u32>,
}

impl SpinPlan {
    pub fn draw<R: Rng>(config: &WheelConfig, rng: &mut R) -> Self {
        let draws = rng.gen_range(config.ingredient_draws.clone());
        Self {
            adjective_id: rng.gen_range(1..=config.adjective_count.max(1)),
            name_id: rng.gen_range(1..=config.name_count.max(1)),
            ingredient_ids: (0..draws)
                .map(|_| rng.gen_range(1..=config.ingredient_pool.max(1)))
                .collect(),
        }
    }
}

/// The drink personality shown after a spin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reveal {
    pub adjective: Option<String>,
    pub name: Option<String>,
    pub ingredients: Vec<String>,
}

impl Reveal {
    /// `"{adjective} {name}"`, leaving out whichever part is missing.
    pub fn title(&self) -> String {
        [self.adjective.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

async fn fetch_name(
    store: &dyn DocumentStore,
    collection: &str,
    id: u32,
) -> Result<Option<String>, FirebaseError> {
    let doc = store.get(collection, &id.to_string()).await?;
    let name = doc.and_then(|d| d.string_field(NAME_FIELD).map(str::to_string));
    if name.is_none() {
        warn!("No {} document with a name for id {}", collection, id);
    }
    Ok(name)
}

/// Fetches every document the plan names and assembles the reveal.
///
/// Missing documents are left out. A store error fails the whole spin.
pub async fn resolve_plan(
    store: &dyn DocumentStore,
    plan: &SpinPlan,
) -> Result<Reveal, FirebaseError> {
    debug!("Resolving spin plan: {:?}", plan);

    let ingredients = async {
        join_all(
            plan.ingredient_ids
                .iter()
                .map(|&id| fetch_name(store, INGREDIENTS, id)),
        )
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
    };

    let (adjective, name, ingredients) = futures::try_join!(
        fetch_name(store, ADJECTIVES, plan.adjective_id),
        fetch_name(store, NAMES, plan.name_id),
        ingredients,
    )?;

    let mut unique: Vec<String> = Vec::new();
    for ingredient in ingredients.into_iter().flatten() {
        if !unique.contains(&ingredient) {
            unique.push(ingredient);
        }
    }

    Ok(Reveal {
        adjective,
        name,
        ingredients: unique,
    })
}
