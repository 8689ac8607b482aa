//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init logging/metrics → Bind listener
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C received → Trigger broadcast → Server drains and exits
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
