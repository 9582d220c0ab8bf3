//! Configuration loading and management for the Vacation Planner.
//!
//! This module loads the planner configuration from YAML files: the server
//! settings and the concurrent-vacation capacity rule.
//!
//! # Example
//!
//! ```no_run
//! use vacation_planner::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Listening on {}", config.server().bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_BIND_ADDRESS, DEFAULT_VACATION_DAYS, PlannerConfig, ServerConfig};
