//! Allergen detection for the Menu Allergen Engine.
//!
//! This module contains the allergen keyword dictionary and the text matcher
//! that maps ingredient text to allergen categories.

mod keyword_table;
mod text_matcher;

pub use keyword_table::AllergenKeywordTable;
pub use text_matcher::{
    KeywordMatch, detect_allergens, detect_allergens_standard, detect_ingredient_allergens,
    find_keyword_matches,
};
