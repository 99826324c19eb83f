//! Core data models for the Menu Allergen Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allergen;
mod menu;
mod school;
mod validation_result;

pub use allergen::AllergenCategory;
pub use menu::{DayMenu, Ingredient};
pub use school::SchoolAllergenProfile;
pub use validation_result::{
    AuditStep, AuditTrace, AuditWarning, ValidationIssue, ValidationReport, ValidationResult,
};
