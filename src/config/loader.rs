//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the program
//! configuration from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::detection::AllergenKeywordTable;
use crate::error::{EngineError, EngineResult};
use crate::models::SchoolAllergenProfile;

use super::types::{AllergensConfig, ProgramConfig, ProgramMetadata, SchoolsConfig};

/// Loads and provides access to the program configuration.
///
/// # Directory Structure
///
/// ```text
/// config/mbg/
/// ├── program.yaml    # Program metadata
/// ├── allergens.yaml  # Allergen keyword dictionary
/// └── schools.yaml    # School allergen profiles
/// ```
///
/// # Example
///
/// ```no_run
/// use menu_allergen_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/mbg").unwrap();
/// let school = loader.get_school("sdn-01-menteng").unwrap();
/// println!("{} restricts {:?}", school.name, school.restricted_allergens);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ProgramConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or unknown allergen names (`ConfigParseError`)
    /// - A keyword is empty, a label disagrees with its category, or a school
    ///   id is repeated (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ProgramMetadata>(&path.join("program.yaml"))?;

        let allergens = Self::load_yaml::<AllergensConfig>(&path.join("allergens.yaml"))?;
        allergens.check_labels()?;
        let keyword_table = AllergenKeywordTable::from_entries(
            allergens
                .allergens
                .into_iter()
                .map(|(category, entry)| (category, entry.keywords)),
        )?;

        let schools = Self::load_yaml::<SchoolsConfig>(&path.join("schools.yaml"))?;

        Self::from_parts(metadata, keyword_table, schools.schools)
    }

    /// Builds a loader from already-constructed parts.
    ///
    /// This lets callers inject school profiles fetched from elsewhere
    /// instead of reading them from disk.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if two schools share an id.
    pub fn from_parts(
        metadata: ProgramMetadata,
        keyword_table: AllergenKeywordTable,
        schools: Vec<SchoolAllergenProfile>,
    ) -> EngineResult<Self> {
        let mut seen = HashSet::new();
        for school in &schools {
            if !seen.insert(school.id.as_str()) {
                return Err(EngineError::InvalidConfig {
                    message: format!("duplicate school id '{}'", school.id),
                });
            }
        }

        debug!(
            program = %metadata.code,
            keywords = keyword_table.keyword_count(),
            schools = schools.len(),
            "Program configuration ready"
        );

        Ok(Self {
            config: ProgramConfig::new(metadata, keyword_table, schools),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        debug!(path = %path_str, "Loaded configuration file");

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying program configuration.
    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    /// Returns the program metadata.
    pub fn program(&self) -> &ProgramMetadata {
        self.config.program()
    }

    /// Returns the allergen keyword dictionary.
    pub fn keyword_table(&self) -> &AllergenKeywordTable {
        self.config.keyword_table()
    }

    /// Returns all configured school profiles in configured order.
    pub fn schools(&self) -> &[SchoolAllergenProfile] {
        self.config.schools()
    }

    /// Gets a school profile by its id.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use menu_allergen_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/mbg")?;
    /// let school = loader.get_school("sdn-01-menteng")?;
    /// println!("School: {}", school.name);
    /// # Ok::<(), menu_allergen_engine::error::EngineError>(())
    /// ```
    pub fn get_school(&self, id: &str) -> EngineResult<&SchoolAllergenProfile> {
        self.config
            .schools()
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| EngineError::SchoolNotFound { id: id.to_string() })
    }
}
