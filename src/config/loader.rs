//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading planner
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PlannerError, PlannerResult};
use crate::models::CapacityRule;

use super::types::{PlannerConfig, ServerConfig};

/// Loads and provides access to planner configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── server.yaml    # Bind address, log level, default allowance
/// └── capacity.yaml  # Concurrent-vacation capacity rule
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_planner::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Capacity: {}%", loader.capacity_rule().percentage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PlannerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The capacity percentage lies outside 0..=100
    /// - The log level is not a tracing level
    pub fn load<P: AsRef<Path>>(path: P) -> PlannerResult<Self> {
        let path = path.as_ref();

        let server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;
        let capacity = Self::load_yaml::<CapacityRule>(&path.join("capacity.yaml"))?;

        capacity.validate()?;
        parse_log_level(&server.log_level).map_err(|message| PlannerError::ConfigParseError {
            path: path.join("server.yaml").display().to_string(),
            message,
        })?;

        Ok(Self {
            config: PlannerConfig::new(server, capacity),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PlannerResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PlannerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PlannerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }

    /// Returns the concurrent-vacation capacity rule.
    pub fn capacity_rule(&self) -> CapacityRule {
        *self.config.capacity()
    }

    /// Returns the configured maximum tracing level.
    pub fn log_level(&self) -> tracing::Level {
        parse_log_level(&self.server().log_level).unwrap_or(tracing::Level::INFO)
    }
}

fn parse_log_level(level: &str) -> Result<tracing::Level, String> {
    level
        .parse::<tracing::Level>()
        .map_err(|_| format!("unknown log level '{}'", level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "vacation-planner-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.capacity_rule(), CapacityRule::default());
        assert_eq!(loader.server().bind_address, "0.0.0.0:8001");
        assert_eq!(loader.server().default_vacation_days, 25);
        assert_eq!(loader.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(PlannerError::ConfigNotFound { path }) => {
                assert!(path.contains("server.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_fixed_cap() {
        let dir = scratch_dir("fixed-cap");
        fs::write(dir.join("server.yaml"), "log_level: debug\n").unwrap();
        fs::write(
            dir.join("capacity.yaml"),
            "max_concurrent_percentage: 30\nmax_concurrent_fixed: 4\n",
        )
        .unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.capacity_rule().fixed_cap, NonZeroU32::new(4));
        assert_eq!(loader.log_level(), tracing::Level::DEBUG);
        assert_eq!(loader.server().bind_address, "0.0.0.0:8001");

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_percentage_over_hundred_is_rejected() {
        let dir = scratch_dir("bad-percentage");
        fs::write(dir.join("server.yaml"), "{}\n").unwrap();
        fs::write(dir.join("capacity.yaml"), "max_concurrent_percentage: 120\n").unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(PlannerError::InvalidCapacityRule { .. })));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = scratch_dir("bad-yaml");
        fs::write(dir.join("server.yaml"), "bind_address: [unclosed\n").unwrap();
        fs::write(dir.join("capacity.yaml"), "{}\n").unwrap();

        match ConfigLoader::load(&dir) {
            Err(PlannerError::ConfigParseError { path, .. }) => {
                assert!(path.contains("server.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_unknown_log_level_is_parse_error() {
        let dir = scratch_dir("bad-level");
        fs::write(dir.join("server.yaml"), "log_level: loud\n").unwrap();
        fs::write(dir.join("capacity.yaml"), "{}\n").unwrap();

        match ConfigLoader::load(&dir) {
            Err(PlannerError::ConfigParseError { message, .. }) => {
                assert!(message.contains("loud"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).ok();
    }
}
