//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_dispatch_total` (counter): dispatches by method and outcome
//! - `router_dispatch_duration_seconds` (histogram): time spent in `Router::run`
//!
//! Updates are no-ops until a recorder is installed.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::routing::ANY_METHODS;

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Label value for a request method.
///
/// Clients choose the method token freely, so anything outside the standard
/// verbs collapses into `OTHER` to keep the series count fixed.
pub fn method_label(method: &str) -> &'static str {
    ANY_METHODS
        .iter()
        .chain(&["HEAD"])
        .find(|known| known.eq_ignore_ascii_case(method))
        .copied()
        .unwrap_or("OTHER")
}

/// Record one dispatch.
pub fn record_dispatch(method: &str, outcome: &'static str, start: Instant) {
    metrics::counter!(
        "router_dispatch_total",
        "method" => method_label(method),
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("router_dispatch_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_label_is_bounded() {
        assert_eq!(method_label("GET"), "GET");
        assert_eq!(method_label("options"), "OPTIONS");
        assert_eq!(method_label("HEAD"), "HEAD");
        for token in ["FOO1", "FOO2", "PROPFIND", ""] {
            assert_eq!(method_label(token), "OTHER", "{token:?}");
        }
    }
}
