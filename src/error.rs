//! Error types for the Menu Allergen Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Allergen detection and menu validation are total and never fail; errors
//! only arise while loading configuration or parsing input at the API boundary.

use thiserror::Error;

/// The main error type for the Menu Allergen Engine.
///
/// # Example
///
/// ```
/// use menu_allergen_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schools.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schools.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its content is inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        message: String,
    },

    /// No school profile exists with the given identifier.
    #[error("School not found: {id}")]
    SchoolNotFound {
        /// The school identifier that was not found.
        id: String,
    },

    /// A string did not name a known allergen category.
    #[error("Unknown allergen category: {name}")]
    UnknownAllergen {
        /// The unrecognised name.
        name: String,
    },

    /// A submitted menu was structurally invalid.
    #[error("Invalid menu '{menu_id}': {message}")]
    InvalidMenu {
        /// The ID of the offending menu.
        menu_id: String,
        /// A description of what made the menu invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
