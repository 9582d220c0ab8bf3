//! Application state for the Vacation Planner API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::planner::VacationPlanner;

/// Shared application state.
///
/// Holds the planner service shared by every request handler.
#[derive(Clone, Debug)]
pub struct AppState {
    planner: Arc<VacationPlanner>,
}

impl AppState {
    /// Creates a new application state around the given planner.
    pub fn new(planner: VacationPlanner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }

    /// Returns a reference to the planner.
    pub fn planner(&self) -> &VacationPlanner {
        &self.planner
    }
}
