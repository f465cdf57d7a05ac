//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::state::{App, Services};
use crate::firebase::{AssetResolver, Document, DocumentStore, FirebaseError};
use crate::recipes::{Drink, DrinkSummary, ProviderError, RecipeProvider};

/// A minimal full recipe record.
pub fn drink(id: &str, name: &str) -> Drink {
    Drink {
        id: id.to_string(),
        name: Some(name.to_string()),
        category: Some("Cocktail".to_string()),
        alcoholic: Some("Alcoholic".to_string()),
        glass: Some("Highball glass".to_string()),
        instructions: Some("Stir with ice.".to_string()),
        thumbnail: None,
        extra: HashMap::new(),
    }
}

/// In-memory recipe provider.
///
/// Letter searches return drinks whose name starts with the letter plus any
/// drink pinned to that letter with `with_drink_for`.
#[derive(Default)]
pub struct FakeRecipes {
    drinks: Vec<Drink>,
    pinned: Vec<(char, Drink)>,
    failing_letters: HashSet<char>,
    flaky_letters: Mutex<HashSet<char>>,
    unparseable_letters: HashSet<char>,
    letter_calls: Mutex<usize>,
    filter_calls: Mutex<Vec<String>>,
}

impl FakeRecipes {
    pub fn with_drink(mut self, drink: Drink) -> Self {
        self.drinks.push(drink);
        self
    }

    pub fn with_drink_for(mut self, letter: char, drink: Drink) -> Self {
        self.pinned.push((letter, drink));
        self
    }

    pub fn failing_letter(mut self, letter: char) -> Self {
        self.failing_letters.insert(letter);
        self
    }

    /// The first search for `letter` fails with a network error.
    pub fn flaky_letter(self, letter: char) -> Self {
        self.flaky_letters.lock().unwrap().insert(letter);
        self
    }

    pub fn unparseable_letter(mut self, letter: char) -> Self {
        self.unparseable_letters.insert(letter);
        self
    }

    pub fn letter_calls(&self) -> usize {
        *self.letter_calls.lock().unwrap()
    }

    pub fn filter_calls(&self) -> Vec<String> {
        self.filter_calls.lock().unwrap().clone()
    }

    fn summaries(&self) -> Vec<DrinkSummary> {
        self.drinks
            .iter()
            .map(|d| DrinkSummary {
                id: d.id.clone(),
                name: d.display_name().to_string(),
                thumbnail: None,
            })
            .collect()
    }
}

#[async_trait]
impl RecipeProvider for FakeRecipes {
    fn name(&self) -> &str {
        "fake"
    }

    async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Drink>, ProviderError> {
        *self.letter_calls.lock().unwrap() += 1;
        if self.failing_letters.contains(&letter) {
            return Err(ProviderError::Network("connection refused".to_string()));
        }
        if self.flaky_letters.lock().unwrap().remove(&letter) {
            return Err(ProviderError::Network("connection reset".to_string()));
        }
        if self.unparseable_letters.contains(&letter) {
            return Err(ProviderError::Parse("expected value".to_string()));
        }
        let mut found: Vec<Drink> = self
            .drinks
            .iter()
            .filter(|d| {
                d.name
                    .as_deref()
                    .and_then(|n| n.chars().next())
                    .is_some_and(|c| c.eq_ignore_ascii_case(&letter))
            })
            .cloned()
            .collect();
        found.extend(
            self.pinned
                .iter()
                .filter(|(l, _)| *l == letter)
                .map(|(_, d)| d.clone()),
        );
        Ok(found)
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Drink>, ProviderError> {
        let term = term.to_lowercase();
        Ok(self
            .drinks
            .iter()
            .filter(|d| d.display_name().to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    async fn lookup(&self, id: &str) -> Result<Option<Drink>, ProviderError> {
        Ok(self.drinks.iter().find(|d| d.id == id).cloned())
    }

    async fn random(&self) -> Result<Option<Drink>, ProviderError> {
        Ok(self.drinks.first().cloned())
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<DrinkSummary>, ProviderError> {
        self.filter_calls
            .lock()
            .unwrap()
            .push(format!("i={ingredient}"));
        Ok(self.summaries())
    }

    async fn filter_by_alcoholic(&self, kind: &str) -> Result<Vec<DrinkSummary>, ProviderError> {
        self.filter_calls.lock().unwrap().push(format!("a={kind}"));
        Ok(self.summaries())
    }
}

/// In-memory document store keyed by `(collection, id)`.
#[derive(Default)]
pub struct FakeStore {
    docs: HashMap<(String, String), String>,
    failing: bool,
}

impl FakeStore {
    pub fn with(mut self, collection: &str, id: &str, name: &str) -> Self {
        self.docs
            .insert((collection.to_string(), id.to_string()), name.to_string());
        self
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, FirebaseError> {
        if self.failing {
            return Err(FirebaseError::Network("unreachable".to_string()));
        }
        Ok(self
            .docs
            .get(&(collection.to_string(), id.to_string()))
            .map(|name| Document {
                id: id.to_string(),
                fields: HashMap::from([(
                    "name".to_string(),
                    serde_json::json!({ "stringValue": name }),
                )]),
            }))
    }
}

/// Resolves every path to a fixed fake URL.
pub struct FakeAssets;

#[async_trait]
impl AssetResolver for FakeAssets {
    async fn resolve(&self, path: &str) -> Result<String, FirebaseError> {
        Ok(format!("https://assets.test/{path}"))
    }
}

/// Creates a test App with in-memory collaborators.
pub fn test_app() -> App {
    App::new(Services {
        recipes: Arc::new(FakeRecipes::default()),
        store: Some(Arc::new(FakeStore::default())),
        assets: Some(Arc::new(FakeAssets)),
    })
}

/// Creates a test App with no Firebase collaborators.
pub fn test_app_without_firebase() -> App {
    App::new(Services {
        recipes: Arc::new(FakeRecipes::default()),
        store: None,
        assets: None,
    })
}
