//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! favicon derivation, HTTP handlers
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (derivation outcome counters)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - `RUST_LOG` overrides the configured level
//! - Metrics are cheap (atomic increments) and a no-op until installed

pub mod logging;
pub mod metrics;
