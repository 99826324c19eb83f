//! School allergen profile model.
//!
//! A profile carries a school's allergy policy: the categories it restricts
//! and, for information only, the historical average exposure per category.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AllergenCategory;

/// One school's allergy policy.
///
/// Profiles are loaded once from configuration and are read-only afterwards.
///
/// # Example
///
/// ```
/// use menu_allergen_engine::models::{AllergenCategory, SchoolAllergenProfile};
/// use std::collections::{BTreeMap, BTreeSet};
///
/// let school = SchoolAllergenProfile {
///     id: "sdn-01".to_string(),
///     name: "SD Negeri 01 Menteng".to_string(),
///     restricted_allergens: BTreeSet::from([AllergenCategory::Peanut]),
///     exposure: BTreeMap::new(),
/// };
/// assert!(school.restricts(AllergenCategory::Peanut));
/// assert!(!school.restricts(AllergenCategory::Milk));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolAllergenProfile {
    /// Unique identifier for the school.
    pub id: String,
    /// Display name of the school.
    pub name: String,
    /// Categories that must not appear in any menu served to this school.
    #[serde(default)]
    pub restricted_allergens: BTreeSet<AllergenCategory>,
    /// Historical average exposure percentage per category.
    ///
    /// Informational only; validation never reads it.
    #[serde(default)]
    pub exposure: BTreeMap<AllergenCategory, Decimal>,
}

impl SchoolAllergenProfile {
    /// Returns true if the school restricts the given category.
    pub fn restricts(&self, category: AllergenCategory) -> bool {
        self.restricted_allergens.contains(&category)
    }

    /// Returns the historical exposure percentage recorded for a category.
    pub fn exposure_for(&self, category: AllergenCategory) -> Option<Decimal> {
        self.exposure.get(&category).copied()
    }

    /// Returns the category with the highest recorded exposure.
    ///
    /// Ties resolve to the category that comes first in declaration order.
    pub fn highest_exposure(&self) -> Option<(AllergenCategory, Decimal)> {
        self.exposure
            .iter()
            .fold(None, |best, (&category, &pct)| match best {
                Some((_, best_pct)) if best_pct >= pct => best,
                _ => Some((category, pct)),
            })
    }
}
