//! Menu validation against a school's allergen restrictions.
//!
//! This module evaluates one [`DayMenu`] against one [`SchoolAllergenProfile`]
//! and reports every ingredient that risks violating the school's
//! restrictions.

use std::collections::BTreeSet;

use crate::detection::{AllergenKeywordTable, detect_ingredient_allergens};
use crate::models::{
    AllergenCategory, DayMenu, Ingredient, SchoolAllergenProfile, ValidationIssue,
    ValidationResult,
};

/// Validates a menu against a school's restricted allergens.
///
/// For each ingredient, its name and notes are screened with the keyword
/// table and the detected categories are intersected with the school's
/// restrictions. A non-empty intersection produces one [`ValidationIssue`]
/// carrying only the restricted categories.
///
/// # Behavior
///
/// - Issues follow the order of `menu.ingredients`
/// - An empty menu or a school without restrictions yields no issues
/// - Never fails and never mutates its inputs; identical inputs give
///   identical results
///
/// # Example
///
/// ```
/// use menu_allergen_engine::detection::AllergenKeywordTable;
/// use menu_allergen_engine::models::{AllergenCategory, DayMenu, Ingredient, SchoolAllergenProfile};
/// use menu_allergen_engine::validation::validate_menu;
/// use chrono::NaiveDate;
/// use std::collections::{BTreeMap, BTreeSet};
///
/// let school = SchoolAllergenProfile {
///     id: "sdn-01".to_string(),
///     name: "SD Negeri 01".to_string(),
///     restricted_allergens: BTreeSet::from([AllergenCategory::Milk, AllergenCategory::Peanut]),
///     exposure: BTreeMap::new(),
/// };
/// let menu = DayMenu {
///     id: "menu_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     name: None,
///     description: None,
///     calories: None,
///     protein_grams: None,
///     ingredients: vec![Ingredient {
///         id: "ing_001".to_string(),
///         name: "Es Krim Kacang".to_string(),
///         notes: Some("mengandung susu dan kacang tanah".to_string()),
///         quantity: None,
///     }],
/// };
///
/// let result = validate_menu(&menu, &school, &AllergenKeywordTable::standard());
/// assert!(result.has_risk());
/// assert_eq!(
///     result.issues()[0].allergens,
///     BTreeSet::from([AllergenCategory::Milk, AllergenCategory::Peanut])
/// );
/// ```
pub fn validate_menu(
    menu: &DayMenu,
    school: &SchoolAllergenProfile,
    table: &AllergenKeywordTable,
) -> ValidationResult {
    if school.restricted_allergens.is_empty() {
        return ValidationResult::empty();
    }

    let issues = menu
        .ingredients
        .iter()
        .filter_map(|ingredient| check_ingredient(ingredient, school, table))
        .collect();

    ValidationResult::from_issues(issues)
}

/// Screens a single ingredient, returning an issue if it matches any
/// restricted category.
pub fn check_ingredient(
    ingredient: &Ingredient,
    school: &SchoolAllergenProfile,
    table: &AllergenKeywordTable,
) -> Option<ValidationIssue> {
    let detected = detect_ingredient_allergens(ingredient, table);
    let restricted = restricted_subset(&detected, school);

    if restricted.is_empty() {
        return None;
    }

    Some(ValidationIssue {
        ingredient_id: ingredient.id.clone(),
        ingredient_name: ingredient.name.clone(),
        allergens: restricted,
    })
}

/// Intersects detected categories with the school's restrictions.
pub(crate) fn restricted_subset(
    detected: &BTreeSet<AllergenCategory>,
    school: &SchoolAllergenProfile,
) -> BTreeSet<AllergenCategory> {
    detected
        .intersection(&school.restricted_allergens)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn standard() -> AllergenKeywordTable {
        AllergenKeywordTable::standard()
    }

    fn create_school(restricted: &[AllergenCategory]) -> SchoolAllergenProfile {
        SchoolAllergenProfile {
            id: "sdn-01".to_string(),
            name: "SD Negeri 01 Menteng".to_string(),
            restricted_allergens: restricted.iter().copied().collect(),
            exposure: BTreeMap::new(),
        }
    }

    fn create_ingredient(id: &str, name: &str, notes: Option<&str>) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: name.to_string(),
            notes: notes.map(str::to_string),
            quantity: None,
        }
    }

    fn create_menu(ingredients: Vec<Ingredient>) -> DayMenu {
        DayMenu {
            id: "menu_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            name: Some("Menu Senin".to_string()),
            description: None,
            calories: None,
            protein_grams: None,
            ingredients,
        }
    }

    fn set(categories: &[AllergenCategory]) -> BTreeSet<AllergenCategory> {
        categories.iter().copied().collect()
    }

    #[test]
    fn test_es_krim_kacang_flags_milk_and_peanut() {
        let school = create_school(&[AllergenCategory::Milk, AllergenCategory::Peanut]);
        let menu = create_menu(vec![create_ingredient(
            "ing_001",
            "Es Krim Kacang",
            Some("mengandung susu dan kacang tanah"),
        )]);

        let result = validate_menu(&menu, &school, &standard());

        assert!(result.has_risk());
        assert_eq!(result.issues().len(), 1);
        assert_eq!(result.issues()[0].ingredient_id, "ing_001");
        assert_eq!(result.issues()[0].ingredient_name, "Es Krim Kacang");
        assert_eq!(
            result.issues()[0].allergens,
            set(&[AllergenCategory::Milk, AllergenCategory::Peanut])
        );
    }

    #[test]
    fn test_ayam_goreng_has_no_risk() {
        let school = create_school(&[AllergenCategory::Seafood]);
        let menu = create_menu(vec![create_ingredient(
            "ing_001",
            "Ayam Goreng",
            Some("tanpa bahan tambahan"),
        )]);

        let result = validate_menu(&menu, &school, &standard());

        assert!(!result.has_risk());
        assert!(result.issues().is_empty());
    }

    #[test]
    fn test_unrestricted_match_is_not_reported() {
        let school = create_school(&[AllergenCategory::Wheat]);
        let menu = create_menu(vec![create_ingredient("ing_001", "Kerupuk Udang", None)]);

        let result = validate_menu(&menu, &school, &standard());

        assert!(!result.has_risk());
        assert!(result.issues().is_empty());
    }

    #[test]
    fn test_only_restricted_subset_is_reported() {
        let school = create_school(&[AllergenCategory::Egg]);
        let menu = create_menu(vec![create_ingredient(
            "ing_001",
            "Bakwan Sayur",
            Some("tepung terigu, telur"),
        )]);

        let result = validate_menu(&menu, &school, &standard());

        assert_eq!(result.issues().len(), 1);
        assert_eq!(result.issues()[0].allergens, set(&[AllergenCategory::Egg]));
    }

    #[test]
    fn test_empty_menu_has_no_risk() {
        let school = create_school(&[AllergenCategory::Milk]);
        let result = validate_menu(&create_menu(vec![]), &school, &standard());

        assert!(!result.has_risk());
        assert!(result.issues().is_empty());
    }

    #[test]
    fn test_school_without_restrictions_has_no_risk() {
        let school = create_school(&[]);
        let menu = create_menu(vec![create_ingredient("ing_001", "Susu Kedelai", None)]);

        let result = validate_menu(&menu, &school, &standard());

        assert!(!result.has_risk());
    }

    #[test]
    fn test_missing_name_and_notes_are_tolerated() {
        let school = create_school(&[AllergenCategory::Milk]);
        let menu = create_menu(vec![
            create_ingredient("ing_001", "", None),
            create_ingredient("ing_002", "", Some("susu UHT")),
        ]);

        let result = validate_menu(&menu, &school, &standard());

        assert_eq!(result.issues().len(), 1);
        assert_eq!(result.issues()[0].ingredient_id, "ing_002");
        assert_eq!(result.issues()[0].ingredient_name, "");
    }

    #[test]
    fn test_issues_follow_ingredient_order() {
        let school = create_school(&[AllergenCategory::Soy, AllergenCategory::Fish]);
        let menu = create_menu(vec![
            create_ingredient("ing_003", "Tempe Goreng", None),
            create_ingredient("ing_001", "Nasi Putih", None),
            create_ingredient("ing_002", "Pepes Ikan", None),
            create_ingredient("ing_000", "Tahu Bacem", Some("kecap manis")),
        ]);

        let result = validate_menu(&menu, &school, &standard());

        let ids: Vec<&str> = result
            .issues()
            .iter()
            .map(|i| i.ingredient_id.as_str())
            .collect();
        assert_eq!(ids, vec!["ing_003", "ing_002", "ing_000"]);
    }

    #[test]
    fn test_one_issue_per_ingredient() {
        let school = create_school(&[AllergenCategory::Milk, AllergenCategory::Egg]);
        let menu = create_menu(vec![create_ingredient(
            "ing_001",
            "Puding Susu",
            Some("susu, telur, krim, keju"),
        )]);

        let result = validate_menu(&menu, &school, &standard());

        assert_eq!(result.issues().len(), 1);
        assert_eq!(
            result.issues()[0].allergens,
            set(&[AllergenCategory::Milk, AllergenCategory::Egg])
        );
    }

    #[test]
    fn test_validation_does_not_mutate_inputs() {
        let school = create_school(&[AllergenCategory::Milk]);
        let menu = create_menu(vec![create_ingredient("ing_001", "Susu Coklat", None)]);
        let school_before = school.clone();
        let menu_before = menu.clone();

        let _ = validate_menu(&menu, &school, &standard());

        assert_eq!(school, school_before);
        assert_eq!(menu, menu_before);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let school = create_school(&[AllergenCategory::Milk, AllergenCategory::Soy]);
        let menu = create_menu(vec![
            create_ingredient("ing_001", "Susu Coklat", None),
            create_ingredient("ing_002", "Tahu Goreng", None),
        ]);

        let first = validate_menu(&menu, &school, &standard());
        let second = validate_menu(&menu, &school, &standard());

        assert_eq!(first, second);
    }

    #[test]
    fn test_check_ingredient_directly() {
        let school = create_school(&[AllergenCategory::Seafood]);
        let issue = check_ingredient(
            &create_ingredient("ing_001", "Udang Balado", None),
            &school,
            &standard(),
        );
        assert_eq!(
            issue.map(|i| i.allergens),
            Some(set(&[AllergenCategory::Seafood]))
        );
    }

    fn any_category() -> impl Strategy<Value = AllergenCategory> {
        proptest::sample::select(AllergenCategory::ALL.to_vec())
    }

    fn any_ingredient() -> impl Strategy<Value = Ingredient> {
        (
            "[a-z]{1,6}",
            prop::sample::select(vec![
                "Susu", "Telur Dadar", "Tempe", "Nasi", "Sayur Bayam", "Udang", "Roti", "Ikan",
                "Ayam", "Pisang",
            ]),
            prop::option::of("[a-z ]{0,20}"),
        )
            .prop_map(|(id, name, notes)| Ingredient {
                id,
                name: name.to_string(),
                notes,
                quantity: None,
            })
    }

    proptest! {
        #[test]
        fn prop_has_risk_iff_issues_non_empty(
            ingredients in prop::collection::vec(any_ingredient(), 0..8),
            restricted in prop::collection::btree_set(any_category(), 0..7),
        ) {
            let mut school = create_school(&[]);
            school.restricted_allergens = restricted;
            let result = validate_menu(&create_menu(ingredients), &school, &standard());
            prop_assert_eq!(result.has_risk(), !result.issues().is_empty());
        }

        #[test]
        fn prop_no_restrictions_means_no_risk(
            ingredients in prop::collection::vec(any_ingredient(), 0..8),
        ) {
            let result = validate_menu(&create_menu(ingredients), &create_school(&[]), &standard());
            prop_assert!(!result.has_risk());
        }

        #[test]
        fn prop_issue_allergens_are_restricted_and_non_empty(
            ingredients in prop::collection::vec(any_ingredient(), 0..8),
            restricted in prop::collection::btree_set(any_category(), 0..7),
        ) {
            let mut school = create_school(&[]);
            school.restricted_allergens = restricted;
            let result = validate_menu(&create_menu(ingredients), &school, &standard());
            for issue in result.issues() {
                prop_assert!(!issue.allergens.is_empty());
                prop_assert!(issue.allergens.is_subset(&school.restricted_allergens));
            }
        }

        #[test]
        fn prop_issue_count_never_exceeds_ingredients(
            ingredients in prop::collection::vec(any_ingredient(), 0..8),
            restricted in prop::collection::btree_set(any_category(), 0..7),
        ) {
            let count = ingredients.len();
            let mut school = create_school(&[]);
            school.restricted_allergens = restricted;
            let result = validate_menu(&create_menu(ingredients), &school, &standard());
            prop_assert!(result.issues().len() <= count);
        }
    }
}
