//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router
//! service. All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

/// Root configuration for the router service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Where the application is mounted below the web root.
    pub mount: MountConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Static routes, registered in file order.
    pub routes: Vec<RouteConfig>,

    /// Override for the default 404 reply.
    pub not_found: Option<NotFoundConfig>,

    /// Global gate answering every matched request with 503.
    pub maintenance: MaintenanceConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Prefixes stripped from the request path before routing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MountConfig {
    /// Directory the app lives under, e.g. "/app". "/" disables stripping.
    pub base_path: String,

    /// Front-controller file name removed wherever `/<script_name>` appears.
    pub script_name: Option<String>,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            script_name: Some("index.php".to_string()),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// A static route answering with a fixed body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier for logging.
    #[serde(default)]
    pub name: Option<String>,

    /// Methods to register; "ANY" expands to every standard verb.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,

    /// Path template, e.g. "/users/{id}".
    pub path: String,

    /// Status code of the reply.
    #[serde(default = "default_status")]
    pub status: u16,

    /// Reply body; `{name}` is replaced by the bound parameter.
    #[serde(default)]
    pub body: String,
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string()]
}

fn default_status() -> u16 {
    200
}

/// Fallback reply when nothing matches.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NotFoundConfig {
    pub status: u16,
    pub body: String,
}

impl Default for NotFoundConfig {
    fn default() -> Self {
        Self {
            status: 404,
            body: "404 Not Found".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MaintenanceConfig {
    pub enabled: bool,
    pub message: String,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            message: "Service under maintenance".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: RouterConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.mount.base_path, "/");
        assert_eq!(config.mount.script_name.as_deref(), Some("index.php"));
        assert!(config.routes.is_empty());
        assert!(config.not_found.is_none());
    }

    #[test]
    fn test_routes_parse_in_order() {
        let config: RouterConfig = toml::from_str(
            r#"
            [[routes]]
            path = "/users/{id}"
            body = "user {id}"

            [[routes]]
            name = "health"
            methods = ["GET", "post"]
            path = "/health"
            status = 204
            "#,
        )
        .unwrap();

        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].methods, vec!["GET"]);
        assert_eq!(config.routes[0].status, 200);
        assert_eq!(config.routes[1].name.as_deref(), Some("health"));
        assert_eq!(config.routes[1].status, 204);
    }
}
