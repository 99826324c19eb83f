//! Validation result models for the Menu Allergen Engine.
//!
//! This module contains the [`ValidationResult`] produced by screening a menu,
//! and the [`ValidationReport`] envelope that adds identity, timing and an
//! audit trace of every screening decision.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AllergenCategory;

/// A report that one ingredient matches one or more restricted categories.
///
/// `allergens` holds only the categories the school restricts, never the
/// full set detected in the ingredient text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// The ID of the offending ingredient.
    pub ingredient_id: String,
    /// The display name of the offending ingredient.
    pub ingredient_name: String,
    /// Restricted categories matched by the ingredient.
    pub allergens: BTreeSet<AllergenCategory>,
}

/// The outcome of validating one menu against one school.
///
/// `has_risk` is always equal to `!issues.is_empty()`. Values are only built
/// through [`ValidationResult::from_issues`]; deserialization recomputes
/// `has_risk` from the issues and ignores any serialized flag.
///
/// # Example
///
/// ```
/// use menu_allergen_engine::models::ValidationResult;
///
/// let result = ValidationResult::from_issues(vec![]);
/// assert!(!result.has_risk());
/// assert!(result.issues().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawValidationResult")]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
    has_risk: bool,
}

#[derive(Deserialize)]
struct RawValidationResult {
    #[serde(default)]
    issues: Vec<ValidationIssue>,
}

impl From<RawValidationResult> for ValidationResult {
    fn from(raw: RawValidationResult) -> Self {
        Self::from_issues(raw.issues)
    }
}

impl ValidationResult {
    /// Builds a result from its issues, deriving `has_risk`.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let has_risk = !issues.is_empty();
        Self { issues, has_risk }
    }

    /// A result with no issues.
    pub fn empty() -> Self {
        Self::from_issues(Vec::new())
    }

    /// One entry per offending ingredient, in menu order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// True when at least one ingredient violates a restriction.
    pub fn has_risk(&self) -> bool {
        self.has_risk
    }

    /// Returns the issue raised for a given ingredient, if any.
    pub fn issue_for(&self, ingredient_id: &str) -> Option<&ValidationIssue> {
        self.issues.iter().find(|i| i.ingredient_id == ingredient_id)
    }

    /// Returns every restricted category matched anywhere in the menu.
    pub fn violated_allergens(&self) -> BTreeSet<AllergenCategory> {
        self.issues
            .iter()
            .flat_map(|i| i.allergens.iter().copied())
            .collect()
    }
}

/// A single step in the audit trace recording one screening decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The ingredient this step screened.
    pub ingredient_id: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during validation.
///
/// Warnings flag input that deserves attention but never change the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of screening steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during validation.
    pub warnings: Vec<AuditWarning>,
    /// The total validation duration in microseconds.
    pub duration_us: u64,
}

/// The envelope returned to API callers for a single validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Unique identifier for this validation.
    pub validation_id: Uuid,
    /// When the validation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the validation.
    pub engine_version: String,
    /// The ID of the menu that was validated.
    pub menu_id: String,
    /// The ID of the school the menu was validated against.
    pub school_id: String,
    /// The validation outcome.
    pub result: ValidationResult,
    /// Complete audit trace of screening decisions.
    pub audit_trace: AuditTrace,
}
