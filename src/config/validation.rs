//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, status codes, addresses)
//! - Check method names on static routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Route paths are never rejected; any string is a valid template

use std::net::SocketAddr;

use axum::http::StatusCode;
use thiserror::Error;

use crate::config::schema::RouterConfig;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid {field} address {value:?}")]
    Address { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("mount.base_path {0:?} must start with '/'")]
    BasePath(String),

    #[error("route #{index}: invalid method {method:?}")]
    Method { index: usize, method: String },

    #[error("route #{index}: no methods given")]
    NoMethods { index: usize },

    #[error("{context}: invalid status code {status}")]
    Status { context: String, status: u16 },
}

pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::Address {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::Address {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if !config.mount.base_path.starts_with('/') {
        errors.push(ValidationError::BasePath(config.mount.base_path.clone()));
    }

    for (index, route) in config.routes.iter().enumerate() {
        if route.methods.is_empty() {
            errors.push(ValidationError::NoMethods { index });
        }
        for method in &route.methods {
            if !is_method_token(method) {
                errors.push(ValidationError::Method {
                    index,
                    method: method.clone(),
                });
            }
        }
        if StatusCode::from_u16(route.status).is_err() {
            errors.push(ValidationError::Status {
                context: format!("route #{index}"),
                status: route.status,
            });
        }
    }

    if let Some(not_found) = &config.not_found {
        if StatusCode::from_u16(not_found.status).is_err() {
            errors.push(ValidationError::Status {
                context: "not_found".to_string(),
                status: not_found.status,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_method_token(method: &str) -> bool {
    !method.is_empty() && method.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{NotFoundConfig, RouteConfig};

    fn route(methods: &[&str], status: u16) -> RouteConfig {
        RouteConfig {
            name: None,
            methods: methods.iter().map(|m| m.to_string()).collect(),
            path: "{not a param}//".into(),
            status,
            body: String::new(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RouterConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = RouterConfig::default();
        config.listener.bind_address = "nowhere".into();
        config.timeouts.request_secs = 0;
        config.mount.base_path = "app".into();
        config.routes.push(route(&["GET", "G3T"], 1000));
        config.routes.push(route(&[], 200));
        config.not_found = Some(NotFoundConfig { status: 42, body: String::new() });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 7, "{errors:?}");
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::Method { index: 0, method: "G3T".into() }));
        assert!(errors.contains(&ValidationError::NoMethods { index: 1 }));
    }

    #[test]
    fn test_odd_paths_are_accepted() {
        let mut config = RouterConfig::default();
        config.routes.push(route(&["any"], 200));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = RouterConfig::default();
        config.observability.metrics_address = "bad".into();
        assert!(validate_config(&config).is_ok());
        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
