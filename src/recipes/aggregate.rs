//! # Aggregate Fetches
//!
//! Fan-out requests whose results only make sense together.
//!
//! The A-Z catalog is one `search.php?f=` per letter. All 26 run
//! concurrently, and the catalog (sort + index) is built once every one of
//! them has returned. A partially-arrived list is never indexed. Letters that
//! failed with a retryable error get one more concurrent round first.

use std::collections::HashSet;

use futures::future::join_all;
use log::{debug, info, warn};

use crate::core::catalog::Catalog;
use crate::core::index::Entry;
use crate::recipes::{Drink, ProviderError, RecipeProvider};

/// Fetches every drink, one request per letter, and builds the catalog.
///
/// Letters whose request fails are retried once when the error is
/// retryable, then logged and skipped. Fails only when no letter succeeded.
pub async fn fetch_catalog(provider: &dyn RecipeProvider) -> Result<Catalog, ProviderError> {
    let letters: Vec<char> = ('a'..='z').collect();
    let mut results = join_all(
        letters
            .iter()
            .map(|&letter| provider.search_by_first_letter(letter)),
    )
    .await;

    let retry: Vec<usize> = results
        .iter()
        .enumerate()
        .filter(|(_, result)| matches!(result, Err(e) if e.is_retryable()))
        .map(|(i, _)| i)
        .collect();
    if !retry.is_empty() {
        debug!("Retrying {} letter searches", retry.len());
        let retried = join_all(
            retry
                .iter()
                .map(|&i| provider.search_by_first_letter(letters[i])),
        )
        .await;
        for (i, result) in retry.into_iter().zip(retried) {
            results[i] = result;
        }
    }

    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    let mut first_error = None;
    let mut failed = 0usize;

    for (letter, result) in letters.iter().zip(results) {
        let drinks = match result {
            Ok(drinks) => drinks,
            Err(e) => {
                warn!("Catalog fetch for '{}' failed: {}", letter, e);
                failed += 1;
                first_error.get_or_insert(e);
                continue;
            }
        };
        for drink in &drinks {
            match Entry::try_from(drink) {
                Ok(entry) => {
                    if seen.insert(entry.id.clone()) {
                        entries.push(entry);
                    }
                }
                Err(e) => warn!("Skipping drink from '{}': {}", letter, e),
            }
        }
    }

    if failed == letters.len()
        && let Some(e) = first_error
    {
        return Err(e);
    }

    info!(
        "Catalog fetched: {} drinks ({} of {} letters failed)",
        entries.len(),
        failed,
        letters.len()
    );
    Ok(Catalog::new(entries))
}

/// Fetches `count` random drinks concurrently. Failed or empty draws are
/// dropped, as are repeats.
pub async fn fetch_random(provider: &dyn RecipeProvider, count: usize) -> Vec<Drink> {
    let results = join_all((0..count).map(|_| provider.random())).await;

    let mut seen = HashSet::new();
    let mut drinks = Vec::with_capacity(count);
    for result in results {
        match result {
            Ok(Some(drink)) => {
                if seen.insert(drink.id.clone()) {
                    drinks.push(drink);
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Random drink fetch failed: {}", e),
        }
    }
    drinks
}
