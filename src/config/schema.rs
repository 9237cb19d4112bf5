//! Configuration schema definitions.
//!
//! This module defines the complete document the resolver is driven from.
//! All types derive Serde traits for deserialization from config files.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::metadata::{Marker, Parameter};
use crate::options::OptionSet;
use crate::resolver::DEFAULT_MAX_DEPTH;

/// Root configuration document.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MenuConfig {
    /// Resolver tuning.
    pub resolver: ResolverConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route table: route name to controller action.
    pub routes: Vec<RouteConfig>,

    /// Registered controller actions with their parameters and markers.
    pub handlers: Vec<HandlerConfig>,

    /// Class-level markers of controller classes.
    pub classes: Vec<ClassConfig>,

    /// The menu itself: named items and the tree.
    pub menu: MenuDocument,
}

/// Named entries plus the tree they are merged into.
///
/// After resolution `items` entries of consumed roots are `None`.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MenuDocument {
    /// Named Entry Table.
    pub items: IndexMap<String, Option<OptionSet>>,

    /// Tree roots by name. Each root nests its own `children`.
    pub tree: IndexMap<String, OptionSet>,
}

/// Resolver configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum nesting depth of the tree; deeper input is rejected.
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route name, as referenced by menu nodes.
    pub name: String,

    /// URL pattern. Informational only.
    #[serde(default)]
    pub path: Option<String>,

    /// Controller action, `Class::method`.
    #[serde(default)]
    pub controller: Option<String>,

    /// Route defaults. `_controller` is used when `controller` is absent.
    #[serde(default)]
    pub defaults: OptionSet,
}

impl RouteConfig {
    /// Controller string of this route, explicit field first.
    pub fn controller(&self) -> Option<&str> {
        self.controller
            .as_deref()
            .or_else(|| self.defaults.get("_controller").and_then(|v| v.as_str()))
            .filter(|c| !c.is_empty())
    }
}

/// A controller action with its signature and method-level markers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HandlerConfig {
    /// Controller action, `Class::method`.
    pub controller: String,

    /// Class declaring the method, when it differs from the class part.
    #[serde(default)]
    pub declaring_class: Option<String>,

    /// Method parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Method-level markers.
    #[serde(default)]
    pub markers: Vec<Marker>,
}

/// Class-level markers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassConfig {
    pub name: String,

    #[serde(default)]
    pub markers: Vec<Marker>,
}
