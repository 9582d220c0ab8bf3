//! Response types for the Vacation Planner API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::ConcurrencyVerdict;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// The negative verdict behind a capacity rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<ConcurrencyVerdict>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            verdict: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a capacity rejection carrying the verdict.
    pub fn capacity_exceeded(verdict: ConcurrencyVerdict) -> Self {
        Self {
            verdict: Some(verdict.clone()),
            ..Self::new("CAPACITY_EXCEEDED", verdict.rejection_message())
        }
    }
}

/// Plain acknowledgement body for deletes and health checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Outcome of the call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message without a status.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PlannerError> for ApiErrorResponse {
    fn from(error: PlannerError) -> Self {
        let message = error.to_string();
        match error {
            PlannerError::InvalidRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    message,
                    "Start date must be before or equal to end date",
                ),
            },
            PlannerError::RangeTooLong { max_days, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RANGE_TOO_LONG",
                    message,
                    format!("Date ranges may span at most {} days", max_days),
                ),
            },
            PlannerError::InvalidEmployee { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    message,
                    "The employee data contains invalid information",
                ),
            },
            PlannerError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", message),
            },
            PlannerError::EntryNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("ENTRY_NOT_FOUND", message),
            },
            PlannerError::CapacityExceeded { verdict } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::capacity_exceeded(*verdict),
            },
            PlannerError::NegativeHeadcount { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Capacity check failed",
                    message,
                ),
            },
            PlannerError::InvalidCapacityRule { .. }
            | PlannerError::ConfigNotFound { .. }
            | PlannerError::ConfigParseError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}
