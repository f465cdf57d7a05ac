use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::index::{Entry, InvalidEntry};

/// Highest ingredient slot in a recipe record (`strIngredient1..=15`).
pub const MAX_INGREDIENTS: usize = 15;

/// A full recipe record as returned by `search.php`, `lookup.php` and `random.php`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Drink {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    pub alcoholic: Option<String>,
    #[serde(rename = "strGlass", default)]
    pub glass: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail: Option<String>,
    /// Numbered ingredient/measure slots and anything else the API sends.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

impl Drink {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed drink")
    }

    /// Non-blank ingredients in slot order, each with its measure if present.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|slot| {
                let name = self.slot(&format!("strIngredient{slot}"))?;
                Some(Ingredient {
                    name,
                    measure: self.slot(&format!("strMeasure{slot}")),
                })
            })
            .collect()
    }

    /// Trimmed string value of a numbered slot; blank and null are `None`.
    fn slot(&self, key: &str) -> Option<String> {
        self.extra
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

impl TryFrom<&Drink> for Entry {
    type Error = InvalidEntry;

    fn try_from(drink: &Drink) -> Result<Self, Self::Error> {
        let label = drink.name.as_deref().ok_or_else(|| InvalidEntry::MissingLabel {
            id: drink.id.clone(),
        })?;
        if label.trim().is_empty() {
            return Err(InvalidEntry::BlankLabel {
                id: drink.id.clone(),
            });
        }
        let entry = Entry::new(drink.id.clone(), label);
        Ok(match &drink.category {
            Some(category) => entry.with_category(category.clone()),
            None => entry,
        })
    }
}

/// The short record returned by `filter.php`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DrinkSummary {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail: Option<String>,
}

impl From<&DrinkSummary> for Entry {
    fn from(summary: &DrinkSummary) -> Self {
        Entry::new(summary.id.clone(), summary.name.clone())
    }
}

/// Extracts the `drinks` array from a response body.
///
/// The API answers an empty search with `"drinks": null` and some empty
/// filters with `"drinks": "no data found"`; both mean no results.
pub fn parse_drinks<T: DeserializeOwned>(
    mut body: serde_json::Value,
) -> Result<Vec<T>, serde_json::Error> {
    match body.get_mut("drinks").map(serde_json::Value::take) {
        Some(list @ serde_json::Value::Array(_)) => serde_json::from_value(list),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn margarita() -> Drink {
        serde_json::from_value(json!({
            "idDrink": "11007",
            "strDrink": "Margarita",
            "strCategory": "Ordinary Drink",
            "strAlcoholic": "Alcoholic",
            "strGlass": "Cocktail glass",
            "strInstructions": "Rub the rim of the glass with the lime slice.",
            "strDrinkThumb": "https://example.test/margarita.jpg",
            "strIngredient1": "Tequila",
            "strIngredient2": "Triple sec",
            "strIngredient3": "Lime juice",
            "strIngredient4": "",
            "strIngredient5": null,
            "strMeasure1": "1 1/2 oz ",
            "strMeasure2": "1/2 oz ",
            "strMeasure3": null
        }))
        .unwrap()
    }

    #[test]
    fn test_ingredients_skip_blank_slots() {
        let ingredients = margarita().ingredients();
        assert_eq!(ingredients.len(), 3);
        assert_eq!(ingredients[0].name, "Tequila");
        assert_eq!(ingredients[0].measure.as_deref(), Some("1 1/2 oz"));
        assert_eq!(ingredients[2].name, "Lime juice");
        assert_eq!(ingredients[2].measure, None);
    }

    #[test]
    fn test_entry_from_drink_carries_category() {
        let entry = Entry::try_from(&margarita()).unwrap();
        assert_eq!(entry.id, "11007");
        assert_eq!(entry.label, "Margarita");
        assert_eq!(entry.category.as_deref(), Some("Ordinary Drink"));
    }

    #[test]
    fn test_entry_from_nameless_drink_is_invalid() {
        let mut drink = margarita();
        drink.name = None;
        assert_eq!(
            Entry::try_from(&drink),
            Err(InvalidEntry::MissingLabel { id: "11007".to_string() })
        );
        drink.name = Some(" ".to_string());
        assert!(matches!(
            Entry::try_from(&drink),
            Err(InvalidEntry::BlankLabel { .. })
        ));
    }

    #[test]
    fn test_parse_drinks_null_and_string_are_empty() {
        let none: Vec<DrinkSummary> = parse_drinks(json!({ "drinks": null })).unwrap();
        assert!(none.is_empty());
        let no_data: Vec<DrinkSummary> =
            parse_drinks(json!({ "drinks": "no data found" })).unwrap();
        assert!(no_data.is_empty());
        let missing: Vec<DrinkSummary> = parse_drinks(json!({})).unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn test_parse_drinks_reports_malformed_records() {
        let result: Result<Vec<DrinkSummary>, _> =
            parse_drinks(json!({ "drinks": [{ "strDrink": "No id" }] }));
        assert!(result.is_err());
    }
}
