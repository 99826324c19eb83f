//! Menu validation for the Menu Allergen Engine.
//!
//! This module evaluates day menus against school allergen restrictions:
//! single menus, whole weeks, one menu across several schools, and audited
//! validations that record each screening decision.

mod audit;
mod menu_validator;
mod multi_school;
mod weekly;

pub use audit::{
    ALLERGEN_SCREENING_RULE_ID, EMPTY_INGREDIENT_TEXT, NO_RESTRICTIONS, ValidationAudit,
    audit_validation,
};
pub use menu_validator::{check_ingredient, validate_menu};
pub use multi_school::{SchoolValidation, validate_for_schools};
pub use weekly::{DayValidation, WeeklyValidation, validate_week};
