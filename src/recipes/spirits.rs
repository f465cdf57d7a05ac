//! The fixed spirit menu: six base spirits, each with a button image in the
//! asset store and a drink filter on the recipe provider.

use crate::recipes::{DrinkSummary, ProviderError, RecipeProvider};

/// Folder in the asset store holding the menu button images.
pub const IMAGE_FOLDER: &str = "button-image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spirit {
    Gin,
    Whiskey,
    Vodka,
    Rum,
    Tequila,
    NonAlcoholic,
}

impl Spirit {
    pub const ALL: [Spirit; 6] = [
        Spirit::Gin,
        Spirit::Whiskey,
        Spirit::Vodka,
        Spirit::Rum,
        Spirit::Tequila,
        Spirit::NonAlcoholic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Spirit::Gin => "Gin",
            Spirit::Whiskey => "Whiskey",
            Spirit::Vodka => "Vodka",
            Spirit::Rum => "Rum",
            Spirit::Tequila => "Tequila",
            Spirit::NonAlcoholic => "Non-Alcoholic",
        }
    }

    /// Asset path of the menu button image.
    pub fn image_path(self) -> String {
        let file = match self {
            Spirit::Gin => "gin.jpg",
            Spirit::Whiskey => "whiskey.jpg",
            Spirit::Vodka => "vodka.jpg",
            Spirit::Rum => "rum.jpg",
            Spirit::Tequila => "tequila.jpg",
            Spirit::NonAlcoholic => "non-alcohol.jpg",
        };
        format!("{IMAGE_FOLDER}/{file}")
    }

    /// Drinks made with this spirit. Non-alcoholic filters on alcohol
    /// content instead of an ingredient.
    pub async fn fetch_drinks(
        self,
        provider: &dyn RecipeProvider,
    ) -> Result<Vec<DrinkSummary>, ProviderError> {
        match self {
            Spirit::NonAlcoholic => provider.filter_by_alcoholic("Non_Alcoholic").await,
            spirit => provider.filter_by_ingredient(spirit.label()).await,
        }
    }
}
