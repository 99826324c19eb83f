//! Allergen category model.
//!
//! This module defines the fixed set of food-allergen classes used to
//! classify ingredients and express school restrictions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A food-allergen class.
///
/// Categories are ordered by declaration, which is also the order used when
/// they are collected into sets and reported.
///
/// # Example
///
/// ```
/// use menu_allergen_engine::models::AllergenCategory;
///
/// let category: AllergenCategory = "Susu".parse().unwrap();
/// assert_eq!(category, AllergenCategory::Milk);
/// assert_eq!(category.to_string(), "milk");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum AllergenCategory {
    /// Milk and dairy products.
    Milk,
    /// Eggs.
    Egg,
    /// Peanuts.
    Peanut,
    /// Shellfish and other seafood.
    Seafood,
    /// Fish.
    Fish,
    /// Wheat and gluten.
    Wheat,
    /// Soy.
    Soy,
}

impl AllergenCategory {
    /// Every category, in declaration order.
    pub const ALL: [AllergenCategory; 7] = [
        AllergenCategory::Milk,
        AllergenCategory::Egg,
        AllergenCategory::Peanut,
        AllergenCategory::Seafood,
        AllergenCategory::Fish,
        AllergenCategory::Wheat,
        AllergenCategory::Soy,
    ];

    /// Returns the machine-readable code used in JSON and YAML.
    pub fn code(&self) -> &'static str {
        match self {
            AllergenCategory::Milk => "milk",
            AllergenCategory::Egg => "egg",
            AllergenCategory::Peanut => "peanut",
            AllergenCategory::Seafood => "seafood",
            AllergenCategory::Fish => "fish",
            AllergenCategory::Wheat => "wheat",
            AllergenCategory::Soy => "soy",
        }
    }

    /// Returns the Indonesian display label shown to kitchen staff.
    pub fn label(&self) -> &'static str {
        match self {
            AllergenCategory::Milk => "Susu",
            AllergenCategory::Egg => "Telur",
            AllergenCategory::Peanut => "Kacang",
            AllergenCategory::Seafood => "Makanan Laut",
            AllergenCategory::Fish => "Ikan",
            AllergenCategory::Wheat => "Gandum",
            AllergenCategory::Soy => "Kedelai",
        }
    }
}

impl fmt::Display for AllergenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AllergenCategory {
    type Err = EngineError;

    /// Parses either the code or the display label, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        AllergenCategory::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| EngineError::UnknownAllergen {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for AllergenCategory {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
