//! Allergen keyword dictionary.
//!
//! This module provides [`AllergenKeywordTable`], the mapping from each
//! [`AllergenCategory`] to the lowercase substrings that indicate its presence
//! in free text.

use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::AllergenCategory;

use super::text_matcher::fold_case;

/// Keywords of the standard dictionary, mostly Indonesian with common
/// English equivalents.
///
/// Matching is substring-based, so some entries are deliberately broad:
/// `santan` (coconut milk) is listed under milk even though it is not dairy.
const STANDARD_KEYWORDS: &[(AllergenCategory, &[&str])] = &[
    (
        AllergenCategory::Milk,
        &[
            "susu", "milk", "dairy", "keju", "cheese", "mentega", "butter", "yogurt", "yoghurt",
            "krim", "cream", "santan",
        ],
    ),
    (
        AllergenCategory::Egg,
        &["telur", "egg", "mayones", "mayonnaise"],
    ),
    (
        AllergenCategory::Peanut,
        &["kacang", "peanut", "gado-gado", "pecel"],
    ),
    (
        AllergenCategory::Seafood,
        &[
            "udang", "shrimp", "prawn", "kepiting", "crab", "cumi", "squid", "kerang", "lobster",
            "rebon",
        ],
    ),
    (
        AllergenCategory::Fish,
        &["ikan", "fish", "tuna", "salmon", "lele", "tongkol", "bandeng"],
    ),
    (
        AllergenCategory::Wheat,
        &["gandum", "wheat", "terigu", "roti", "bread", "mie", "pasta", "gluten"],
    ),
    (
        AllergenCategory::Soy,
        &["kedelai", "soy", "tahu", "tempe", "kecap", "tauco", "edamame"],
    ),
];

/// Mapping from allergen category to indicative keywords.
///
/// Keywords are stored trimmed and case-folded. The table is immutable once
/// built; categories without an entry never match.
///
/// # Example
///
/// ```
/// use menu_allergen_engine::detection::AllergenKeywordTable;
/// use menu_allergen_engine::models::AllergenCategory;
///
/// let table = AllergenKeywordTable::standard();
/// assert!(table.keywords(AllergenCategory::Milk).contains(&"susu".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllergenKeywordTable {
    entries: BTreeMap<AllergenCategory, Vec<String>>,
}

impl AllergenKeywordTable {
    /// Returns the standard dictionary covering all seven categories.
    pub fn standard() -> Self {
        let entries = STANDARD_KEYWORDS
            .iter()
            .map(|(category, keywords)| {
                (*category, keywords.iter().map(|k| k.to_string()).collect())
            })
            .collect();
        Self { entries }
    }

    /// Builds a table from arbitrary keyword lists.
    ///
    /// Keywords are trimmed and case-folded; duplicates within a category are
    /// dropped, keeping the first occurrence. Lists for the same category are
    /// merged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if any keyword is empty after trimming, since an
    /// empty keyword would match every text.
    pub fn from_entries<I, K>(entries: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (AllergenCategory, Vec<K>)>,
        K: AsRef<str>,
    {
        let mut table: BTreeMap<AllergenCategory, Vec<String>> = BTreeMap::new();

        for (category, keywords) in entries {
            let slot = table.entry(category).or_default();
            for keyword in keywords {
                let normalized = fold_case(keyword.as_ref().trim());
                if normalized.is_empty() {
                    return Err(EngineError::InvalidConfig {
                        message: format!("empty keyword for allergen '{}'", category),
                    });
                }
                if !slot.contains(&normalized) {
                    slot.push(normalized);
                }
            }
        }

        Ok(Self { entries: table })
    }

    /// Returns the keywords for a category; empty if the category has none.
    pub fn keywords(&self, category: AllergenCategory) -> &[String] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates over categories and their keywords in category order.
    pub fn iter(&self) -> impl Iterator<Item = (AllergenCategory, &[String])> {
        self.entries
            .iter()
            .map(|(category, keywords)| (*category, keywords.as_slice()))
    }

    /// Returns the total number of keywords across all categories.
    pub fn keyword_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl Default for AllergenKeywordTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_every_category() {
        let table = AllergenKeywordTable::standard();
        for category in AllergenCategory::ALL {
            assert!(
                !table.keywords(category).is_empty(),
                "No keywords for {}",
                category
            );
        }
    }

    #[test]
    fn test_standard_keywords_are_lowercase_and_trimmed() {
        let table = AllergenKeywordTable::standard();
        for (_, keywords) in table.iter() {
            for keyword in keywords {
                assert_eq!(keyword, &keyword.trim().to_lowercase());
            }
        }
    }

    #[test]
    fn test_standard_keyword_count() {
        assert_eq!(AllergenKeywordTable::standard().keyword_count(), 52);
    }

    #[test]
    fn test_santan_is_listed_under_milk() {
        let table = AllergenKeywordTable::standard();
        assert!(table.keywords(AllergenCategory::Milk).contains(&"santan".to_string()));
    }

    #[test]
    fn test_from_entries_normalizes_and_dedupes() {
        let table = AllergenKeywordTable::from_entries(vec![
            (AllergenCategory::Soy, vec!["  Tahu ", "TEMPE", "tahu"]),
            (AllergenCategory::Soy, vec!["kecap"]),
        ])
        .unwrap();

        assert_eq!(
            table.keywords(AllergenCategory::Soy),
            &["tahu".to_string(), "tempe".to_string(), "kecap".to_string()]
        );
        assert!(table.keywords(AllergenCategory::Milk).is_empty());
    }

    #[test]
    fn test_from_entries_rejects_empty_keyword() {
        let result = AllergenKeywordTable::from_entries(vec![(AllergenCategory::Egg, vec!["telur", "  "])]);
        match result {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains("egg"));
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(AllergenKeywordTable::default(), AllergenKeywordTable::standard());
    }
}
