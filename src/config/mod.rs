//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MenuConfig (validated)
//!     → routes/handlers compiled, menu handed to the resolver
//! ```
//!
//! # Design Decisions
//! - All sections have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Menu nodes stay schemaless option maps; only their shape is validated

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    ClassConfig, HandlerConfig, MenuConfig, MenuDocument, ObservabilityConfig, ResolverConfig,
    RouteConfig,
};
pub use validation::{validate_config, ValidationError};
