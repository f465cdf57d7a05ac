//! TheCocktailDB provider.
//!
//! Every endpoint is a GET under `{base_url}/{api_key}/` returning
//! `{"drinks": [...]}`. The public test key is `1`.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use crate::recipes::types::parse_drinks;
use crate::recipes::{Drink, DrinkSummary, ProviderError, RecipeProvider};

pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1";
pub const DEFAULT_API_KEY: &str = "1";

/// TheCocktailDB API provider
pub struct CocktailDbProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl CocktailDbProvider {
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// GETs `{base}/{key}/{endpoint}` with `query` and returns the `drinks` array.
    async fn get_drinks<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ProviderError> {
        let url = format!("{}/{}/{}", self.base_url, self.api_key, endpoint);
        debug!("CocktailDB request: {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    ProviderError::Config(e.to_string())
                } else {
                    ProviderError::Network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("CocktailDB API error: {} - {}", status, err_body);
            return Err(ProviderError::Api {
                status,
                message: err_body,
            });
        }

        // The API sometimes answers with an empty body instead of JSON
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        if text.trim().is_empty() {
            debug!("CocktailDB returned an empty body for {}", endpoint);
            return Ok(Vec::new());
        }
        let body: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| ProviderError::Parse(e.to_string()))?;
        let drinks = parse_drinks(body).map_err(|e| ProviderError::Parse(e.to_string()))?;
        debug!("CocktailDB {} -> {} drinks", endpoint, drinks.len());
        Ok(drinks)
    }
}

#[async_trait]
impl RecipeProvider for CocktailDbProvider {
    fn name(&self) -> &str {
        "cocktaildb"
    }

    async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Drink>, ProviderError> {
        let letter = letter.to_ascii_lowercase().to_string();
        self.get_drinks("search.php", &[("f", letter.as_str())]).await
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Drink>, ProviderError> {
        self.get_drinks("search.php", &[("s", term)]).await
    }

    async fn lookup(&self, id: &str) -> Result<Option<Drink>, ProviderError> {
        let drinks: Vec<Drink> = self.get_drinks("lookup.php", &[("i", id)]).await?;
        if drinks.is_empty() {
            info!("No drink found for id {}", id);
        }
        Ok(drinks.into_iter().next())
    }

    async fn random(&self) -> Result<Option<Drink>, ProviderError> {
        let drinks: Vec<Drink> = self.get_drinks("random.php", &[]).await?;
        Ok(drinks.into_iter().next())
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<DrinkSummary>, ProviderError> {
        self.get_drinks("filter.php", &[("i", ingredient)]).await
    }

    async fn filter_by_alcoholic(&self, kind: &str) -> Result<Vec<DrinkSummary>, ProviderError> {
        self.get_drinks("filter.php", &[("a", kind)]).await
    }
}
