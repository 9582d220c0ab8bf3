//! HTTP request handlers for the Vacation Planner API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    routing::get,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PlannerResult;
use crate::models::{
    AbsenceEntry, AbsenceEntryInput, CapacitySettings, Employee, EmployeeInput, EmployeeSummary,
    EntryFilter, SickDaysSummary, TeamOverview,
};

use super::request::{RangeQuery, YearQuery};
use super::response::{ApiError, ApiErrorResponse, MessageResponse};
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

/// Creates the API router with all endpoints mounted under `/api`.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health_handler))
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/vacation-entries", get(list_entries).post(create_entry))
        .route(
            "/vacation-entries/:id",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .route("/analytics/employee-summary/:id", get(employee_summary))
        .route("/analytics/employee-sick-days/:id", get(employee_sick_days))
        .route("/analytics/team-overview", get(team_overview))
        .route("/settings", get(settings_handler));

    Router::new().nest("/api", api).with_state(state)
}

/// Logs the outcome of a planner call and converts it into a response.
fn finish<T: Serialize>(
    correlation_id: Uuid,
    operation: &'static str,
    result: PlannerResult<T>,
) -> ApiResult<T> {
    match result {
        Ok(value) => {
            info!(correlation_id = %correlation_id, operation, "Request completed");
            Ok(Json(value))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                operation,
                error = %err,
                "Request failed"
            );
            Err(err.into())
        }
    }
}

fn body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
            Err(ApiErrorResponse::bad_request(error))
        }
    }
}

fn path_id(
    correlation_id: Uuid,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Uuid, ApiErrorResponse> {
    id.map(|Path(id)| id).map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection, "Invalid path id");
        ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
    })
}

fn query<T>(
    correlation_id: Uuid,
    query: Result<Query<T>, QueryRejection>,
) -> Result<T, ApiErrorResponse> {
    query.map(|Query(value)| value).map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query string");
        ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
    })
}

/// Handler for GET /api/health.
async fn health_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        status: Some("healthy".to_string()),
        message: "Vacation Planner API is running".to_string(),
    })
}

// =============================================================================
// Employees
// =============================================================================

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<Employee> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Creating employee");
    let input = body(correlation_id, payload)?;
    finish(
        correlation_id,
        "create_employee",
        state.planner().create_employee(input).await,
    )
}

async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    let correlation_id = Uuid::new_v4();
    finish(
        correlation_id,
        "list_employees",
        state.planner().list_employees().await,
    )
}

async fn get_employee(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Employee> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(correlation_id, id)?;
    finish(
        correlation_id,
        "get_employee",
        state.planner().get_employee(id).await,
    )
}

async fn update_employee(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<Employee> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(correlation_id, id)?;
    info!(correlation_id = %correlation_id, employee_id = %id, "Updating employee");
    let input = body(correlation_id, payload)?;
    finish(
        correlation_id,
        "update_employee",
        state.planner().update_employee(id, input).await,
    )
}

async fn delete_employee(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<MessageResponse> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(correlation_id, id)?;
    let result = state
        .planner()
        .delete_employee(id)
        .await
        .map(|()| MessageResponse::new("Employee deleted successfully"));
    finish(correlation_id, "delete_employee", result)
}

// =============================================================================
// Absence entries
// =============================================================================

/// Handler for POST /api/vacation-entries.
///
/// Vacation entries that would push the number of people away on some
/// business day above the configured cap are rejected with
/// `400 CAPACITY_EXCEEDED`; the message names the peak day.
async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<AbsenceEntryInput>, JsonRejection>,
) -> ApiResult<AbsenceEntry> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Creating absence entry");
    let input = body(correlation_id, payload)?;
    finish(
        correlation_id,
        "create_entry",
        state.planner().create_entry(input).await,
    )
}

async fn list_entries(
    State(state): State<AppState>,
    filter: Result<Query<EntryFilter>, QueryRejection>,
) -> ApiResult<Vec<AbsenceEntry>> {
    let correlation_id = Uuid::new_v4();
    let filter = query(correlation_id, filter)?;
    finish(
        correlation_id,
        "list_entries",
        state.planner().list_entries(&filter).await,
    )
}

async fn get_entry(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<AbsenceEntry> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(correlation_id, id)?;
    finish(
        correlation_id,
        "get_entry",
        state.planner().get_entry(id).await,
    )
}

async fn update_entry(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<AbsenceEntryInput>, JsonRejection>,
) -> ApiResult<AbsenceEntry> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(correlation_id, id)?;
    info!(correlation_id = %correlation_id, entry_id = %id, "Updating absence entry");
    let input = body(correlation_id, payload)?;
    finish(
        correlation_id,
        "update_entry",
        state.planner().update_entry(id, input).await,
    )
}

async fn delete_entry(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<MessageResponse> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(correlation_id, id)?;
    let result = state
        .planner()
        .delete_entry(id)
        .await
        .map(|()| MessageResponse::new("Vacation entry deleted successfully"));
    finish(correlation_id, "delete_entry", result)
}

// =============================================================================
// Analytics
// =============================================================================

async fn employee_summary(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    year: Result<Query<YearQuery>, QueryRejection>,
) -> ApiResult<EmployeeSummary> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(correlation_id, id)?;
    let year = query(correlation_id, year)?.year_or_current();
    finish(
        correlation_id,
        "employee_summary",
        state.planner().employee_summary(id, year).await,
    )
}

async fn employee_sick_days(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    year: Result<Query<YearQuery>, QueryRejection>,
) -> ApiResult<SickDaysSummary> {
    let correlation_id = Uuid::new_v4();
    let id = path_id(correlation_id, id)?;
    let year = query(correlation_id, year)?.year_or_current();
    finish(
        correlation_id,
        "employee_sick_days",
        state.planner().sick_days(id, year).await,
    )
}

async fn team_overview(
    State(state): State<AppState>,
    range: Result<Query<RangeQuery>, QueryRejection>,
) -> ApiResult<TeamOverview> {
    let correlation_id = Uuid::new_v4();
    let range = query(correlation_id, range)?;
    finish(
        correlation_id,
        "team_overview",
        state.planner().team_overview(range.into()).await,
    )
}

async fn settings_handler(State(state): State<AppState>) -> ApiResult<CapacitySettings> {
    let correlation_id = Uuid::new_v4();
    finish(correlation_id, "settings", state.planner().settings().await)
}
