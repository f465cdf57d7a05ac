use std::fmt;

use async_trait::async_trait;

use super::types::{Drink, DrinkSummary};

/// Errors that can occur during recipe provider operations.
#[derive(Debug)]
pub enum ProviderError {
    /// Provider misconfigured (bad base URL). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// API returned an error response. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response. Not retryable.
    Parse(String),
}

impl ProviderError {
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Network(_) => true,
            ProviderError::Api { status, .. } => *status >= 500 || *status == 429,
            ProviderError::Config(_) | ProviderError::Parse(_) => false,
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Read-only source of recipe records.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Every drink whose name starts with `letter`.
    async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Drink>, ProviderError>;

    /// Drinks whose name contains `term`.
    async fn search_by_name(&self, term: &str) -> Result<Vec<Drink>, ProviderError>;

    /// Full record for one drink; `None` if the id is unknown.
    async fn lookup(&self, id: &str) -> Result<Option<Drink>, ProviderError>;

    /// One random drink.
    async fn random(&self) -> Result<Option<Drink>, ProviderError>;

    /// Drinks that use `ingredient`.
    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<DrinkSummary>, ProviderError>;

    /// Drinks by alcohol content (`Alcoholic`, `Non_Alcoholic`, `Optional_alcohol`).
    async fn filter_by_alcoholic(&self, kind: &str) -> Result<Vec<DrinkSummary>, ProviderError>;
}
