//! Per-node merge of options, named items, handler metadata and defaults.
//!
//! # Responsibilities
//! - Normalize a node (drop empty values)
//! - Fill missing keys from the named item, then handler markers, then defaults
//! - Publish the resolved node back into the named entry table
//! - Recurse into children
//!
//! # Design Decisions
//! - Every overlay is "add if absent", so precedence is the order of overlays
//! - Route lookup happens at most once per node and only without `uri`
//! - Handler fragments are cached for the duration of a pass

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::metadata::{extract_fragments, ExtractError};
use crate::options::{defaults, is_empty_value, OptionSet, OptionSetExt, CHILDREN};
use crate::resolver::{OptionResolver, ResolveError};
use crate::routing::HandlerId;

/// Named Entry Table. `None` marks an entry consumed by the tree walker.
pub type NamedEntries = IndexMap<String, Option<OptionSet>>;

impl OptionResolver<'_> {
    /// Resolve `node`, registered under `name`, and all of its children.
    ///
    /// Mutates both the node and `entries`: after the call
    /// `entries[name]` holds the resolved node without its children.
    pub fn merge(
        &mut self,
        node: &mut OptionSet,
        entries: &mut NamedEntries,
        name: &str,
    ) -> Result<(), ResolveError> {
        let mut path = Vec::new();
        self.merge_node(node, entries, name, &mut path)
    }

    fn merge_node(
        &mut self,
        node: &mut OptionSet,
        entries: &mut NamedEntries,
        name: &str,
        path: &mut Vec<String>,
    ) -> Result<(), ResolveError> {
        path.push(name.to_string());
        if path.len() > self.max_depth {
            return Err(ResolveError::DepthExceeded {
                path: path.join("/"),
                limit: self.max_depth,
            });
        }

        node.strip_empty();

        if let Some(Some(entry)) = entries.get(name) {
            node.add_missing(entry);
        }

        if !name.is_empty() && !node.is_set("uri") {
            let route = node.str_value("route").unwrap_or(name).to_string();
            let routes = self.routes;

            match routes.resolve_handler(&route).cloned() {
                Some(handler) => {
                    if !node.contains_key("route") {
                        node.insert("route".into(), Value::String(route));
                    }
                    let fragment = self.handler_fragment(&handler, path)?;
                    node.add_missing(&fragment);
                }
                None => {
                    tracing::trace!(node = %path.join("/"), route = %route, "No handler bound to route");
                }
            }
        }

        node.add_missing(&defaults());

        if !name.is_empty() {
            let mut recorded = node.clone();
            recorded.retain(|key, _| key != CHILDREN);
            entries.insert(name.to_string(), Some(recorded));
        }

        let mut children = take_children(node, path)?;
        for (child_name, child) in children.iter_mut() {
            if is_empty_value(child) {
                *child = Value::Object(Map::new());
            }
            let Value::Object(child_node) = child else {
                return Err(ResolveError::MalformedNode {
                    path: format!("{}/{}", path.join("/"), child_name),
                    reason: format!("expected a mapping, found {}", value_kind(child)),
                });
            };
            self.merge_node(child_node, entries, child_name, path)?;
        }
        node.insert(CHILDREN.into(), Value::Object(children));

        tracing::debug!(
            node = %path.join("/"),
            route = node.str_value("route").unwrap_or("-"),
            "Node resolved"
        );
        path.pop();
        Ok(())
    }

    /// Method fragment overlaid with the declaring class fragment.
    fn handler_fragment(
        &mut self,
        handler: &HandlerId,
        path: &[String],
    ) -> Result<OptionSet, ResolveError> {
        if let Some(cached) = self.fragments.get(handler) {
            tracing::trace!(handler = %handler, "Handler fragment cache hit");
            return Ok(cached.clone());
        }

        let arguments: HashMap<String, String> = self
            .introspection
            .parameters_of(handler)
            .iter()
            .map(|p| (p.name.clone(), p.declared_type.clone()))
            .collect();

        let mut fragment = extract_fragments(self.metadata.method_markers(handler), &arguments)
            .map_err(|e| integrity_error(e, handler, path))?;

        let class = self.introspection.declaring_class_of(handler);
        let class_fragment = extract_fragments(self.metadata.class_markers(class), &arguments)
            .map_err(|e| integrity_error(e, handler, path))?;
        fragment.add_missing(&class_fragment);

        self.fragments.insert(handler.clone(), fragment.clone());
        Ok(fragment)
    }
}

fn integrity_error(error: ExtractError, handler: &HandlerId, path: &[String]) -> ResolveError {
    match error {
        ExtractError::UnknownParameter(param) => ResolveError::UnknownSecureParam {
            node: path.join("/"),
            handler: handler.to_string(),
            param,
        },
    }
}

/// Detach the children of `node`, leaving a placeholder in their slot.
fn take_children(node: &mut OptionSet, path: &[String]) -> Result<Map<String, Value>, ResolveError> {
    match node.get_mut(CHILDREN).map(Value::take) {
        None => Ok(Map::new()),
        Some(children) if is_empty_value(&children) => Ok(Map::new()),
        Some(Value::Object(children)) => Ok(children),
        Some(other) => Err(ResolveError::MalformedNode {
            path: path.join("/"),
            reason: format!("`children` must be a mapping, found {}", value_kind(&other)),
        }),
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
