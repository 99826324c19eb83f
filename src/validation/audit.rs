//! Audited menu validation.
//!
//! This module performs the same evaluation as [`validate_menu`](super::validate_menu)
//! while recording one [`AuditStep`] per ingredient, so that kitchen staff can
//! see which keyword triggered each flag.

use std::collections::BTreeSet;

use crate::detection::{AllergenKeywordTable, find_keyword_matches};
use crate::models::{
    AllergenCategory, AuditStep, AuditWarning, DayMenu, SchoolAllergenProfile, ValidationIssue,
    ValidationResult,
};

use super::menu_validator::restricted_subset;

/// Rule identifier recorded on every screening step.
pub const ALLERGEN_SCREENING_RULE_ID: &str = "allergen_screening";

/// Warning code for an ingredient with neither name nor notes.
pub const EMPTY_INGREDIENT_TEXT: &str = "EMPTY_INGREDIENT_TEXT";

/// Warning code for a school that restricts nothing.
pub const NO_RESTRICTIONS: &str = "NO_RESTRICTIONS";

/// The result of an audited validation.
#[derive(Debug, Clone)]
pub struct ValidationAudit {
    /// The validation outcome, identical to `validate_menu` for the same inputs.
    pub result: ValidationResult,
    /// One screening step per ingredient, in menu order.
    pub steps: Vec<AuditStep>,
    /// Input warnings; they never affect `result`.
    pub warnings: Vec<AuditWarning>,
}

/// Validates a menu and records an audit step for every ingredient.
///
/// # Example
///
/// ```
/// use menu_allergen_engine::detection::AllergenKeywordTable;
/// use menu_allergen_engine::models::{AllergenCategory, DayMenu, Ingredient, SchoolAllergenProfile};
/// use menu_allergen_engine::validation::audit_validation;
/// use chrono::NaiveDate;
/// use std::collections::{BTreeMap, BTreeSet};
///
/// let school = SchoolAllergenProfile {
///     id: "sdn-01".to_string(),
///     name: "SD Negeri 01".to_string(),
///     restricted_allergens: BTreeSet::from([AllergenCategory::Soy]),
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
///         name: "Tempe Mendoan".to_string(),
///         notes: None,
///         quantity: None,
///     }],
/// };
///
/// let audit = audit_validation(&menu, &school, &AllergenKeywordTable::standard());
/// assert!(audit.result.has_risk());
/// assert_eq!(audit.steps.len(), 1);
/// assert!(audit.steps[0].reasoning.contains("tempe"));
/// ```
pub fn audit_validation(
    menu: &DayMenu,
    school: &SchoolAllergenProfile,
    table: &AllergenKeywordTable,
) -> ValidationAudit {
    let mut steps = Vec::with_capacity(menu.ingredients.len());
    let mut warnings = Vec::new();
    let mut issues = Vec::new();

    if school.restricted_allergens.is_empty() {
        warnings.push(AuditWarning {
            code: NO_RESTRICTIONS.to_string(),
            message: format!(
                "School '{}' restricts no allergens; every menu passes",
                school.id
            ),
            severity: "low".to_string(),
        });
    }

    for (index, ingredient) in menu.ingredients.iter().enumerate() {
        let text = ingredient.searchable_text();

        if text.trim().is_empty() {
            warnings.push(AuditWarning {
                code: EMPTY_INGREDIENT_TEXT.to_string(),
                message: format!(
                    "Ingredient '{}' has no name or notes and cannot be screened",
                    ingredient.id
                ),
                severity: "medium".to_string(),
            });
        }

        let matches = find_keyword_matches(&text, table);
        let detected: BTreeSet<AllergenCategory> = matches.iter().map(|m| m.category).collect();
        let restricted = restricted_subset(&detected, school);
        let flagged = !restricted.is_empty();

        let reasoning = if matches.is_empty() {
            "No allergen keywords found".to_string()
        } else {
            let found: Vec<String> = matches
                .iter()
                .map(|m| format!("'{}' ({})", m.keyword, m.category))
                .collect();
            if flagged {
                format!(
                    "Found {}; restricted by school: {}",
                    found.join(", "),
                    join_categories(&restricted)
                )
            } else {
                format!("Found {}; none restricted by school", found.join(", "))
            }
        };

        steps.push(AuditStep {
            step_number: index as u32 + 1,
            rule_id: ALLERGEN_SCREENING_RULE_ID.to_string(),
            rule_name: "Allergen Screening".to_string(),
            ingredient_id: ingredient.id.clone(),
            input: serde_json::json!({
                "text": text,
                "restricted_allergens": school.restricted_allergens,
            }),
            output: serde_json::json!({
                "detected": detected,
                "restricted_matches": restricted,
                "flagged": flagged,
            }),
            reasoning,
        });

        if flagged {
            issues.push(ValidationIssue {
                ingredient_id: ingredient.id.clone(),
                ingredient_name: ingredient.name.clone(),
                allergens: restricted,
            });
        }
    }

    ValidationAudit {
        result: ValidationResult::from_issues(issues),
        steps,
        warnings,
    }
}

fn join_categories(categories: &BTreeSet<AllergenCategory>) -> String {
    categories
        .iter()
        .map(AllergenCategory::code)
        .collect::<Vec<_>>()
        .join(", ")
}
