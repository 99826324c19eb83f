//! Request types for the Menu Allergen Engine API.
//!
//! Payloads are parsed into these explicit request types and converted into
//! domain types at the boundary, where optional fields get their defaults and
//! structurally invalid menus are rejected.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DayMenu, Ingredient};

/// Request body for `POST /validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateMenuRequest {
    /// The school to validate against.
    pub school_id: String,
    /// The menu to validate.
    pub menu: DayMenuRequest,
}

/// Request body for `POST /validate/week`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateWeekRequest {
    /// The school to validate against.
    pub school_id: String,
    /// The menus of the week, in calendar order.
    pub menus: Vec<DayMenuRequest>,
}

/// Request body for `POST /validate/schools`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateSchoolsRequest {
    /// Schools to validate against; every configured school when omitted.
    #[serde(default)]
    pub school_ids: Option<Vec<String>>,
    /// The menu to validate.
    pub menu: DayMenuRequest,
}

/// Request body for `POST /detect`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRequest {
    /// Free text to screen.
    pub text: String,
}

/// Menu information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayMenuRequest {
    /// Unique identifier for the menu.
    pub id: String,
    /// The day the menu is served.
    pub date: NaiveDate,
    /// Display name of the dish.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Energy per portion in kilocalories.
    #[serde(default)]
    pub calories: Option<Decimal>,
    /// Protein per portion in grams.
    #[serde(default)]
    pub protein_grams: Option<Decimal>,
    /// Ingredients in authoring order.
    #[serde(default)]
    pub ingredients: Vec<IngredientRequest>,
}

/// Ingredient information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientRequest {
    /// Unique identifier for the ingredient.
    pub id: String,
    /// Display name; null or missing is treated as empty.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Free-text quantity.
    #[serde(default)]
    pub quantity: Option<String>,
}

impl DayMenuRequest {
    /// Converts the request into a [`DayMenu`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidMenu` if the menu id or any ingredient id is blank.
    pub fn into_menu(self) -> EngineResult<DayMenu> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidMenu {
                menu_id: self.id,
                message: "menu id must not be empty".to_string(),
            });
        }

        if let Some(position) = self.ingredients.iter().position(|i| i.id.trim().is_empty()) {
            return Err(EngineError::InvalidMenu {
                menu_id: self.id,
                message: format!("ingredient at position {} has an empty id", position),
            });
        }

        Ok(DayMenu {
            id: self.id,
            date: self.date,
            name: self.name,
            description: self.description,
            calories: self.calories,
            protein_grams: self.protein_grams,
            ingredients: self.ingredients.into_iter().map(Into::into).collect(),
        })
    }
}

impl From<IngredientRequest> for Ingredient {
    fn from(req: IngredientRequest) -> Self {
        Ingredient {
            id: req.id,
            name: req.name.unwrap_or_default(),
            notes: req.notes,
            quantity: req.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_validate_menu_request() {
        let json = r#"{
            "school_id": "sdn-01-menteng",
            "menu": {
                "id": "menu_001",
                "date": "2026-01-12",
                "name": "Nasi Ayam Sayur",
                "calories": "650",
                "ingredients": [
                    { "id": "ing_001", "name": "Ayam Goreng", "notes": null },
                    { "id": "ing_002", "name": null, "quantity": "100 gram" }
                ]
            }
        }"#;

        let request: ValidateMenuRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.school_id, "sdn-01-menteng");
        assert_eq!(request.menu.ingredients.len(), 2);
        assert!(request.menu.ingredients[1].name.is_none());
    }

    #[test]
    fn test_into_menu_defaults_missing_name() {
        let request = DayMenuRequest {
            id: "menu_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            name: None,
            description: None,
            calories: None,
            protein_grams: None,
            ingredients: vec![IngredientRequest {
                id: "ing_001".to_string(),
                name: None,
                notes: Some("susu".to_string()),
                quantity: None,
            }],
        };

        let menu = request.into_menu().unwrap();
        assert_eq!(menu.ingredients[0].name, "");
        assert_eq!(menu.ingredients[0].notes.as_deref(), Some("susu"));
    }

    #[test]
    fn test_into_menu_rejects_blank_menu_id() {
        let request = DayMenuRequest {
            id: "  ".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            name: None,
            description: None,
            calories: None,
            protein_grams: None,
            ingredients: vec![],
        };

        assert!(matches!(
            request.into_menu(),
            Err(EngineError::InvalidMenu { .. })
        ));
    }

    #[test]
    fn test_into_menu_rejects_blank_ingredient_id() {
        let request = DayMenuRequest {
            id: "menu_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            name: None,
            description: None,
            calories: None,
            protein_grams: None,
            ingredients: vec![
                IngredientRequest {
                    id: "ing_001".to_string(),
                    name: Some("Nasi".to_string()),
                    notes: None,
                    quantity: None,
                },
                IngredientRequest {
                    id: "".to_string(),
                    name: Some("Telur".to_string()),
                    notes: None,
                    quantity: None,
                },
            ],
        };

        match request.into_menu() {
            Err(EngineError::InvalidMenu { menu_id, message }) => {
                assert_eq!(menu_id, "menu_001");
                assert!(message.contains("position 1"));
            }
            other => panic!("Expected InvalidMenu error, got {:?}", other),
        }
    }

    #[test]
    fn test_schools_request_without_ids() {
        let json = r#"{ "menu": { "id": "menu_001", "date": "2026-01-12" } }"#;
        let request: ValidateSchoolsRequest = serde_json::from_str(json).unwrap();
        assert!(request.school_ids.is_none());
        assert!(request.menu.ingredients.is_empty());
    }
}
