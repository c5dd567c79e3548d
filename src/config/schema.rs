//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the target router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Registered backend targets.
    pub targets: Vec<TargetConfig>,

    /// Health probing settings.
    pub health_check: HealthCheckConfig,
}

/// A single backend target declaration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetConfig {
    /// Unique target identifier.
    pub id: String,

    /// Opaque connection parameters handed to the caller's connection
    /// factory (e.g. host, port, dsn). The router never interprets them.
    #[serde(default)]
    pub connection_params: HashMap<String, String>,
}

/// Health probing settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthCheckConfig {
    /// Interval between probe ticks in milliseconds.
    pub probe_interval_ms: u64,

    /// Per-probe timeout in milliseconds.
    pub probe_timeout_ms: u64,

    /// Consecutive probe failures before a target leaves the rotation.
    pub unhealthy_threshold: u32,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            probe_interval_ms: 30_000,
            probe_timeout_ms: 5_000,
            unhealthy_threshold: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_defaults() {
        let config = HealthCheckConfig::default();
        assert_eq!(config.probe_interval_ms, 30_000);
        assert_eq!(config.probe_timeout_ms, 5_000);
        assert_eq!(config.unhealthy_threshold, 1);
    }

    #[test]
    fn test_minimal_toml_parses_with_defaults() {
        let toml = r#"
            [[targets]]
            id = "db-1"

            [[targets]]
            id = "db-2"
            connection_params = { host = "10.0.0.2", port = "5432" }
        "#;

        let config: RouterConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets[0].id, "db-1");
        assert!(config.targets[0].connection_params.is_empty());
        assert_eq!(
            config.targets[1].connection_params.get("port").unwrap(),
            "5432"
        );
        assert_eq!(config.health_check.probe_interval_ms, 30_000);
    }

    #[test]
    fn test_health_check_overrides() {
        let toml = r#"
            [[targets]]
            id = "a"

            [health_check]
            probe_interval_ms = 1000
            unhealthy_threshold = 3
        "#;

        let config: RouterConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.health_check.probe_interval_ms, 1000);
        assert_eq!(config.health_check.probe_timeout_ms, 5_000);
        assert_eq!(config.health_check.unhealthy_threshold, 3);
    }
}
