//! Menu option resolution library.
//!
//! Resolves the effective options of every node of a menu tree by merging
//! node-local options, named items, controller metadata and defaults.

pub mod config;
pub mod metadata;
pub mod observability;
pub mod options;
pub mod resolver;
pub mod routing;

pub use config::schema::{MenuConfig, MenuDocument};
pub use metadata::HandlerRegistry;
pub use options::{OptionSet, OptionSetExt};
pub use resolver::{OptionResolver, ResolveError};
pub use routing::StaticRouteTable;
