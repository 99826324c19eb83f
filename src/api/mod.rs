//! HTTP API module for the Menu Allergen Engine.
//!
//! This module provides the REST API endpoints for screening school menus
//! against the allergen profiles of the Makan Bergizi Gratis program.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DayMenuRequest, DetectRequest, IngredientRequest, ValidateMenuRequest, ValidateSchoolsRequest,
    ValidateWeekRequest,
};
pub use response::{ApiError, ApiErrorResponse, DetectResponse};
pub use state::AppState;
