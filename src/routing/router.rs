//! Route lookup by name.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Look up a route by name
//! - Return the bound handler or an explicit absence
//!
//! # Design Decisions
//! - Immutable after construction (no locks needed)
//! - O(1) lookup via HashMap
//! - Unparsable controllers degrade to "no handler" with a warning;
//!   config validation reports them up front

use std::collections::HashMap;

use crate::config::RouteConfig;
use crate::options::OptionSet;
use crate::routing::HandlerId;

/// A route as seen by the resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry {
    pub name: String,
    /// URL pattern. Informational; resolution only uses the name.
    pub path: Option<String>,
    /// Controller action, if the route is bound to one.
    pub handler: Option<HandlerId>,
    /// Route defaults, including `_controller` when declared there.
    pub defaults: OptionSet,
}

/// Capability: look up routes by name.
pub trait RouteTable: std::fmt::Debug {
    /// Returns the route registered under `name`, if any.
    fn lookup_route(&self, name: &str) -> Option<&RouteEntry>;

    /// Handler bound to the route `name`; `None` for unknown or unbound routes.
    fn resolve_handler(&self, name: &str) -> Option<&HandlerId> {
        self.lookup_route(name).and_then(|route| route.handler.as_ref())
    }
}

/// Route table compiled once from configuration.
#[derive(Debug, Default)]
pub struct StaticRouteTable {
    routes: HashMap<String, RouteEntry>,
}

impl StaticRouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile routes from config. Later duplicates replace earlier ones.
    pub fn from_config(routes: &[RouteConfig]) -> Self {
        let mut table = Self::new();
        for route in routes {
            let handler = route.controller().and_then(|controller| {
                match controller.parse::<HandlerId>() {
                    Ok(id) => Some(id),
                    Err(e) => {
                        tracing::warn!(route = %route.name, error = %e, "Ignoring unparsable controller");
                        None
                    }
                }
            });

            table.insert(RouteEntry {
                name: route.name.clone(),
                path: route.path.clone(),
                handler,
                defaults: route.defaults.clone(),
            });
        }

        tracing::debug!(routes = table.len(), "Route table compiled");
        table
    }

    /// Register a route.
    pub fn insert(&mut self, route: RouteEntry) {
        self.routes.insert(route.name.clone(), route);
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteTable for StaticRouteTable {
    fn lookup_route(&self, name: &str) -> Option<&RouteEntry> {
        self.routes.get(name)
    }
}
