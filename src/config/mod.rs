//! Configuration loading and management for the Menu Allergen Engine.
//!
//! This module loads the program configuration from YAML files: program
//! metadata, the allergen keyword dictionary and the school allergen profiles.
//!
//! # Example
//!
//! ```no_run
//! use menu_allergen_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/mbg").unwrap();
//! println!("Loaded program: {}", config.program().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AllergenEntry, AllergensConfig, ProgramConfig, ProgramMetadata, SchoolsConfig};
