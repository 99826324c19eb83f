//! Free-text allergen matching.
//!
//! This module maps arbitrary text to the set of allergen categories it
//! appears to reference, using case-insensitive substring search over an
//! [`AllergenKeywordTable`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{AllergenCategory, Ingredient};

use super::AllergenKeywordTable;

/// A keyword found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// The category the keyword belongs to.
    pub category: AllergenCategory,
    /// The keyword that was found.
    pub keyword: String,
}

/// Detects the allergen categories referenced by a piece of text.
///
/// The input is case-folded and a category is included when any of its
/// keywords occurs anywhere in it. Empty or whitespace-only text yields an
/// empty set.
///
/// Matching is substring-based: a keyword embedded in an unrelated word still
/// matches. This is a known accuracy limit of the dictionary approach.
///
/// # Example
///
/// ```
/// use menu_allergen_engine::detection::{AllergenKeywordTable, detect_allergens};
/// use menu_allergen_engine::models::AllergenCategory;
///
/// let table = AllergenKeywordTable::standard();
/// let found = detect_allergens("Es Krim Kacang mengandung susu", &table);
/// assert!(found.contains(&AllergenCategory::Milk));
/// assert!(found.contains(&AllergenCategory::Peanut));
/// assert!(detect_allergens("   ", &table).is_empty());
/// ```
pub fn detect_allergens(text: &str, table: &AllergenKeywordTable) -> BTreeSet<AllergenCategory> {
    let haystack = fold_case(text);
    if haystack.trim().is_empty() {
        return BTreeSet::new();
    }

    table
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k.as_str())))
        .map(|(category, _)| category)
        .collect()
}

/// Folds case by upper-casing then lower-casing, so characters such as `ſ`
/// compare equal to their upper-case forms.
pub(crate) fn fold_case(text: &str) -> String {
    text.to_uppercase().to_lowercase()
}

/// Detects allergens using [`AllergenKeywordTable::standard`].
pub fn detect_allergens_standard(text: &str) -> BTreeSet<AllergenCategory> {
    detect_allergens(text, &AllergenKeywordTable::standard())
}

/// Detects every allergen referenced by an ingredient's name and notes.
///
/// Unlike menu validation this reports all matches, restricted or not, and
/// backs the per-ingredient allergen badges.
pub fn detect_ingredient_allergens(
    ingredient: &Ingredient,
    table: &AllergenKeywordTable,
) -> BTreeSet<AllergenCategory> {
    detect_allergens(&ingredient.searchable_text(), table)
}

/// Lists every keyword found in the text, in category then keyword order.
///
/// Used to explain detection decisions in audit traces.
pub fn find_keyword_matches(text: &str, table: &AllergenKeywordTable) -> Vec<KeywordMatch> {
    let haystack = fold_case(text);
    if haystack.trim().is_empty() {
        return Vec::new();
    }

    table
        .iter()
        .flat_map(|(category, keywords)| {
            keywords
                .iter()
                .filter(|k| haystack.contains(k.as_str()))
                .map(move |k| KeywordMatch {
                    category,
                    keyword: k.clone(),
                })
        })
        .collect()
}
