//! Validation of one menu against several schools.
//!
//! A kitchen usually cooks one menu for every school on its delivery route;
//! each school's restrictions are checked independently.

use serde::{Deserialize, Serialize};

use crate::detection::AllergenKeywordTable;
use crate::models::{DayMenu, SchoolAllergenProfile, ValidationResult};

use super::validate_menu;

/// The validation outcome of a menu for one school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolValidation {
    /// The school's identifier.
    pub school_id: String,
    /// The school's display name.
    pub school_name: String,
    /// The validation outcome for this school.
    pub result: ValidationResult,
}

/// Validates a menu against each school, in the order given.
pub fn validate_for_schools<'a, I>(
    menu: &DayMenu,
    schools: I,
    table: &AllergenKeywordTable,
) -> Vec<SchoolValidation>
where
    I: IntoIterator<Item = &'a SchoolAllergenProfile>,
{
    schools
        .into_iter()
        .map(|school| SchoolValidation {
            school_id: school.id.clone(),
            school_name: school.name.clone(),
            result: validate_menu(menu, school, table),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AllergenCategory, Ingredient};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn create_school(id: &str, restricted: &[AllergenCategory]) -> SchoolAllergenProfile {
        SchoolAllergenProfile {
            id: id.to_string(),
            name: format!("Sekolah {}", id),
            restricted_allergens: restricted.iter().copied().collect(),
            exposure: BTreeMap::new(),
        }
    }

    fn create_menu() -> DayMenu {
        DayMenu {
            id: "menu_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            name: Some("Nasi Ikan Saus Tiram".to_string()),
            description: None,
            calories: None,
            protein_grams: None,
            ingredients: vec![
                Ingredient {
                    id: "ing_001".to_string(),
                    name: "Ikan Tongkol".to_string(),
                    notes: None,
                    quantity: Some("80 gram".to_string()),
                },
                Ingredient {
                    id: "ing_002".to_string(),
                    name: "Saus Tiram".to_string(),
                    notes: Some("mengandung kerang dan kedelai".to_string()),
                    quantity: None,
                },
            ],
        }
    }

    #[test]
    fn test_each_school_checked_independently() {
        let schools = vec![
            create_school("sdn-01", &[AllergenCategory::Fish]),
            create_school("sdn-02", &[AllergenCategory::Milk]),
            create_school("smp-01", &[AllergenCategory::Seafood, AllergenCategory::Soy]),
        ];

        let results = validate_for_schools(&create_menu(), &schools, &AllergenKeywordTable::standard());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].school_id, "sdn-01");
        assert!(results[0].result.has_risk());
        assert_eq!(results[0].result.issues()[0].ingredient_id, "ing_001");

        assert!(!results[1].result.has_risk());

        assert!(results[2].result.has_risk());
        assert_eq!(results[2].result.issues().len(), 1);
        assert_eq!(results[2].result.issues()[0].ingredient_id, "ing_002");
        assert_eq!(results[2].result.issues()[0].allergens.len(), 2);
        assert_eq!(results[2].school_name, "Sekolah smp-01");
    }

    #[test]
    fn test_no_schools_yields_no_results() {
        let schools: Vec<SchoolAllergenProfile> = Vec::new();
        let results = validate_for_schools(&create_menu(), &schools, &AllergenKeywordTable::standard());
        assert!(results.is_empty());
    }
}
