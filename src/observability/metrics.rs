//! Metrics collection and exposition.
//!
//! # Metrics
//! - `favicon_derivations_total` (counter): derivations by outcome
//!   (`hashed` or `fallback`)
//! - `favicon_requests_total` (counter): API requests by route, status
//!
//! # Design Decisions
//! - Recorded at the HTTP layer; the derivation core stays pure
//! - Prometheus exporter is optional and off by default

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;

use crate::favicon::FaviconPath;

pub const DERIVATIONS_TOTAL: &str = "favicon_derivations_total";
pub const REQUESTS_TOTAL: &str = "favicon_requests_total";

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Outcome label for a derived path.
pub fn outcome(path: &FaviconPath) -> &'static str {
    if path.is_default() {
        "fallback"
    } else {
        "hashed"
    }
}

/// Count one derivation.
pub fn record_derivation(path: &FaviconPath) {
    metrics::counter!(DERIVATIONS_TOTAL, "outcome" => outcome(path)).increment(1);
}

/// Count one API request.
pub fn record_request(route: &'static str, status: u16) {
    metrics::counter!(REQUESTS_TOTAL, "route" => route, "status" => status.to_string()).increment(1);
}
