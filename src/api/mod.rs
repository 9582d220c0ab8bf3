//! HTTP API module for the Vacation Planner.
//!
//! This module provides the REST endpoints for managing employees and
//! absence entries, the team analytics and the capacity settings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RangeQuery, YearQuery};
pub use response::{ApiError, ApiErrorResponse, MessageResponse};
pub use state::AppState;
