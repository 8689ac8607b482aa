//! HTTP API subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, timeout, tracing layers)
//!     → handlers.rs (extract link(s), call favicon::derive)
//!     → JSON response
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, FaviconServer};
