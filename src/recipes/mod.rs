pub mod aggregate;
pub mod provider;
pub mod providers;
pub mod spirits;
pub mod types;

pub use aggregate::{fetch_catalog, fetch_random};
pub use provider::{ProviderError, RecipeProvider};
pub use providers::CocktailDbProvider;
pub use spirits::Spirit;
pub use types::{Drink, DrinkSummary, Ingredient};
