//! Configuration types for the planner.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::CapacityRule;

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8001";

/// Default yearly vacation allowance in business days.
pub const DEFAULT_VACATION_DAYS: u32 = 25;

/// Server settings from `server.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Maximum tracing level (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Yearly vacation allowance given to newly registered employees.
    #[serde(default = "default_vacation_days")]
    pub default_vacation_days: u32,
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_vacation_days() -> u32 {
    DEFAULT_VACATION_DAYS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            log_level: default_log_level(),
            default_vacation_days: DEFAULT_VACATION_DAYS,
        }
    }
}

/// The complete planner configuration loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Server settings.
    server: ServerConfig,
    /// The concurrent-vacation capacity rule.
    capacity: CapacityRule,
}

impl PlannerConfig {
    /// Creates a new PlannerConfig from its component parts.
    pub fn new(server: ServerConfig, capacity: CapacityRule) -> Self {
        Self { server, capacity }
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the capacity rule.
    pub fn capacity(&self) -> &CapacityRule {
        &self.capacity
    }
}
