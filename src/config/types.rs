//! Configuration types for the school meal program.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::detection::AllergenKeywordTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{AllergenCategory, SchoolAllergenProfile};

/// Metadata about the meal program deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramMetadata {
    /// Short program code (e.g., "MBG").
    pub code: String,
    /// The human-readable program name.
    pub name: String,
    /// The version or effective date of this configuration.
    pub version: String,
}

/// One category's entry in allergens.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct AllergenEntry {
    /// Display label for the category; must match [`AllergenCategory::label`].
    pub label: String,
    /// Keywords indicating the category in free text.
    pub keywords: Vec<String>,
}

/// allergens.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AllergensConfig {
    /// Map of category to its dictionary entry.
    pub allergens: BTreeMap<AllergenCategory, AllergenEntry>,
}

impl AllergensConfig {
    /// Checks every configured label against the category's display label.
    ///
    /// Comparison ignores ASCII case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first category whose label differs.
    pub fn check_labels(&self) -> EngineResult<()> {
        for (category, entry) in &self.allergens {
            if !entry.label.trim().eq_ignore_ascii_case(category.label()) {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "label '{}' for allergen '{}' does not match '{}'",
                        entry.label,
                        category,
                        category.label()
                    ),
                });
            }
        }
        Ok(())
    }
}

/// schools.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SchoolsConfig {
    /// School allergen profiles in configured order.
    pub schools: Vec<SchoolAllergenProfile>,
}

/// The complete program configuration.
///
/// Aggregates the metadata, keyword dictionary and school profiles loaded
/// from a configuration directory.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Program metadata.
    metadata: ProgramMetadata,
    /// The allergen keyword dictionary.
    keyword_table: AllergenKeywordTable,
    /// School profiles in configured order.
    schools: Vec<SchoolAllergenProfile>,
}

impl ProgramConfig {
    /// Creates a new ProgramConfig from its component parts.
    pub fn new(
        metadata: ProgramMetadata,
        keyword_table: AllergenKeywordTable,
        schools: Vec<SchoolAllergenProfile>,
    ) -> Self {
        Self {
            metadata,
            keyword_table,
            schools,
        }
    }

    /// Returns the program metadata.
    pub fn program(&self) -> &ProgramMetadata {
        &self.metadata
    }

    /// Returns the allergen keyword dictionary.
    pub fn keyword_table(&self) -> &AllergenKeywordTable {
        &self.keyword_table
    }

    /// Returns all school profiles.
    pub fn schools(&self) -> &[SchoolAllergenProfile] {
        &self.schools
    }
}
