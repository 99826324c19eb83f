//! Menu and ingredient models.
//!
//! This module defines the [`DayMenu`] and [`Ingredient`] types authored by
//! kitchen staff and read by the validator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A named component of a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier for the ingredient within its menu.
    pub id: String,
    /// Display name (e.g., "Tempe Goreng"). Missing or null names are empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Free-text notes, typically listing sub-ingredients.
    #[serde(default)]
    pub notes: Option<String>,
    /// Free-text quantity (e.g., "200 gram").
    #[serde(default)]
    pub quantity: Option<String>,
}

impl Ingredient {
    /// Returns the text screened for allergens: the name and notes joined by
    /// a single space. Missing notes contribute an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use menu_allergen_engine::models::Ingredient;
    ///
    /// let ingredient = Ingredient {
    ///     id: "ing_001".to_string(),
    ///     name: "Es Krim Kacang".to_string(),
    ///     notes: Some("mengandung susu".to_string()),
    ///     quantity: None,
    /// };
    /// assert_eq!(ingredient.searchable_text(), "Es Krim Kacang mengandung susu");
    /// ```
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.name, self.notes.as_deref().unwrap_or(""))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One day's meal plan.
///
/// Only `ingredients` matter to validation; the remaining fields are
/// descriptive metadata carried through for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMenu {
    /// Unique identifier for the menu.
    pub id: String,
    /// The day the menu is served.
    pub date: NaiveDate,
    /// Display name of the dish (e.g., "Nasi Ayam Sayur").
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Energy per portion in kilocalories.
    #[serde(default)]
    pub calories: Option<Decimal>,
    /// Protein per portion in grams.
    #[serde(default)]
    pub protein_grams: Option<Decimal>,
    /// Ingredients in authoring order.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}
