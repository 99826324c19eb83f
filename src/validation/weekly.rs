//! Weekly calendar validation.
//!
//! Validates a sequence of day menus against one school, as shown on the
//! kitchen's weekly menu calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::detection::AllergenKeywordTable;
use crate::models::{DayMenu, SchoolAllergenProfile, ValidationResult};

use super::validate_menu;

/// The validation outcome for one day of the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayValidation {
    /// The ID of the menu served that day.
    pub menu_id: String,
    /// The day the menu is served.
    pub date: NaiveDate,
    /// The validation outcome for the menu.
    pub result: ValidationResult,
}

/// The validation outcome for a run of day menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyValidation {
    /// The school the menus were validated against.
    pub school_id: String,
    /// One entry per menu, in input order.
    pub days: Vec<DayValidation>,
    /// True when any day has risk.
    pub has_risk: bool,
}

impl WeeklyValidation {
    /// Iterates over the days that have at least one issue.
    pub fn risky_days(&self) -> impl Iterator<Item = &DayValidation> {
        self.days.iter().filter(|d| d.result.has_risk())
    }
}

/// Validates each menu against the school, keeping input order.
///
/// Menus are not re-sorted by date; callers decide the calendar order.
pub fn validate_week(
    menus: &[DayMenu],
    school: &SchoolAllergenProfile,
    table: &AllergenKeywordTable,
) -> WeeklyValidation {
    let days: Vec<DayValidation> = menus
        .iter()
        .map(|menu| DayValidation {
            menu_id: menu.id.clone(),
            date: menu.date,
            result: validate_menu(menu, school, table),
        })
        .collect();

    let has_risk = days.iter().any(|d| d.result.has_risk());

    WeeklyValidation {
        school_id: school.id.clone(),
        days,
        has_risk,
    }
}
