//! Option resolution subsystem.
//!
//! # Data Flow
//! ```text
//! MenuDocument { items, tree }
//!     → walker.rs (strip items, visit each root, consume root items)
//!     → merge.rs (per node, depth-first):
//!         node-local > named item > method markers > class markers > defaults
//!     → MenuDocument with every node resolved
//! ```
//!
//! # Design Decisions
//! - One resolver value per pass owns the handler fragment cache
//! - The named entry table is passed by `&mut` through the whole descent
//! - All-or-nothing: the first error aborts the pass
//! - Tree depth is bounded; input is assumed acyclic and the bound enforces it

pub mod error;
pub mod merge;
pub mod walker;

use std::collections::HashMap;

use crate::metadata::{HandlerIntrospection, HandlerRegistry, MetadataProvider};
use crate::options::OptionSet;
use crate::routing::{HandlerId, RouteTable};

pub use error::ResolveError;
pub use merge::NamedEntries;
pub use walker::count_nodes;

/// Default bound on tree depth.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Resolves menu option sets against routes and handler metadata.
#[derive(Debug)]
pub struct OptionResolver<'a> {
    routes: &'a dyn RouteTable,
    introspection: &'a dyn HandlerIntrospection,
    metadata: &'a dyn MetadataProvider,
    max_depth: usize,
    /// Combined method + class fragment per handler, valid for one pass.
    fragments: HashMap<HandlerId, OptionSet>,
}

impl<'a> OptionResolver<'a> {
    pub fn new(
        routes: &'a dyn RouteTable,
        introspection: &'a dyn HandlerIntrospection,
        metadata: &'a dyn MetadataProvider,
    ) -> Self {
        Self {
            routes,
            introspection,
            metadata,
            max_depth: DEFAULT_MAX_DEPTH,
            fragments: HashMap::new(),
        }
    }

    /// Resolver backed by a single registry for introspection and markers.
    pub fn with_registry(routes: &'a dyn RouteTable, registry: &'a HandlerRegistry) -> Self {
        Self::new(routes, registry, registry)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
