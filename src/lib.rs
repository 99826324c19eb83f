//! Menu Allergen Engine for school meal programs
//!
//! This crate screens day menus planned by a central kitchen (dapur) against the
//! allergen restrictions declared by the schools it serves. Ingredient text is
//! keyword-matched against an allergen dictionary and cross-referenced with each
//! school's restricted categories.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod detection;
pub mod error;
pub mod models;
pub mod validation;
