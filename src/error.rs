//! Crate error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Errors a handler can raise while consuming a match.
///
/// Routing itself never fails; these only come from opt-in strict helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("handler expects {expected} path parameter(s), route bound {actual}")]
    Arity { expected: usize, actual: usize },
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
