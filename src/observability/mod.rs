//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields: node path, route, handler)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, filtered by level)
//! ```
//!
//! # Design Decisions
//! - Structured fields rather than formatted strings
//! - Logs go to stderr; stdout carries resolved output only
//! - `RUST_LOG` overrides the configured level

pub mod logging;

pub use logging::init_logging;
