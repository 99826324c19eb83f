//! HTTP request handlers for the Menu Allergen Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::detection::detect_allergens;
use crate::error::EngineResult;
use crate::models::{AuditTrace, DayMenu, SchoolAllergenProfile, ValidationReport};
use crate::validation::{audit_validation, validate_for_schools, validate_week};

use super::request::{DetectRequest, ValidateMenuRequest, ValidateSchoolsRequest, ValidateWeekRequest};
use super::response::{ApiError, ApiErrorResponse, DetectResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/validate", post(validate_handler))
        .route("/validate/week", post(validate_week_handler))
        .route("/validate/schools", post(validate_schools_handler))
        .route("/detect", post(detect_handler))
        .route("/schools", get(list_schools_handler))
        .route("/schools/:id", get(get_school_handler))
        .with_state(state)
}

/// Handler for POST /validate endpoint.
///
/// Validates one day's menu against one school and returns a
/// [`ValidationReport`] with its audit trace.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateMenuRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing menu validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let school = match config.get_school(&request.school_id) {
        Ok(school) => school,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                school_id = %request.school_id,
                "School not found"
            );
            return error_response(err.into());
        }
    };

    let menu = match request.menu.into_menu() {
        Ok(menu) => menu,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid menu");
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    let audit = audit_validation(&menu, school, config.keyword_table());
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        school_id = %school.id,
        menu_id = %menu.id,
        ingredients_count = menu.ingredients.len(),
        issues_count = audit.result.issues().len(),
        has_risk = audit.result.has_risk(),
        duration_us,
        "Menu validation completed"
    );

    let report = ValidationReport {
        validation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        menu_id: menu.id,
        school_id: school.id.clone(),
        result: audit.result,
        audit_trace: AuditTrace {
            steps: audit.steps,
            warnings: audit.warnings,
            duration_us,
        },
    };

    json_response(StatusCode::OK, &report)
}

/// Handler for POST /validate/week endpoint.
async fn validate_week_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateWeekRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let school = match config.get_school(&request.school_id) {
        Ok(school) => school,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                school_id = %request.school_id,
                "School not found"
            );
            return error_response(err.into());
        }
    };

    let menus: EngineResult<Vec<DayMenu>> = request
        .menus
        .into_iter()
        .map(|menu| menu.into_menu())
        .collect();
    let menus = match menus {
        Ok(menus) => menus,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid menu");
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    let weekly = validate_week(&menus, school, config.keyword_table());

    info!(
        correlation_id = %correlation_id,
        school_id = %school.id,
        days_count = weekly.days.len(),
        risky_days = weekly.risky_days().count(),
        duration_us = start_time.elapsed().as_micros(),
        "Weekly validation completed"
    );

    json_response(StatusCode::OK, &weekly)
}

/// Handler for POST /validate/schools endpoint.
///
/// Validates a single menu against the requested schools, or against every
/// configured school when no ids are given.
async fn validate_schools_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateSchoolsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing multi-school validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let schools: Vec<&SchoolAllergenProfile> = match &request.school_ids {
        Some(ids) => {
            let found: EngineResult<Vec<_>> = ids.iter().map(|id| config.get_school(id)).collect();
            match found {
                Ok(schools) => schools,
                Err(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "School not found");
                    return error_response(err.into());
                }
            }
        }
        None => config.schools().iter().collect(),
    };

    let menu = match request.menu.into_menu() {
        Ok(menu) => menu,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid menu");
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    let results = validate_for_schools(&menu, schools, config.keyword_table());

    info!(
        correlation_id = %correlation_id,
        menu_id = %menu.id,
        schools_count = results.len(),
        at_risk_count = results.iter().filter(|r| r.result.has_risk()).count(),
        duration_us = start_time.elapsed().as_micros(),
        "Multi-school validation completed"
    );

    json_response(StatusCode::OK, &results)
}

/// Handler for POST /detect endpoint.
async fn detect_handler(
    State(state): State<AppState>,
    payload: Result<Json<DetectRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let allergens = detect_allergens(&request.text, state.config().keyword_table());
    info!(
        correlation_id = %correlation_id,
        detected_count = allergens.len(),
        "Allergen detection completed"
    );

    json_response(
        StatusCode::OK,
        &DetectResponse {
            allergens: allergens.into_iter().collect(),
        },
    )
}

/// Handler for GET /schools endpoint.
async fn list_schools_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().schools())
}

/// Handler for GET /schools/:id endpoint.
async fn get_school_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.config().get_school(&id) {
        Ok(school) => json_response(StatusCode::OK, school),
        Err(err) => {
            warn!(school_id = %id, "School not found");
            error_response(err.into())
        }
    }
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's detailed message lives in the body text
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, &error)
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, &api_error.error)
}

fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
