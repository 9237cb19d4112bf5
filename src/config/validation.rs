//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check controller strings parse as `Class::method`
//! - Detect duplicate routes, handlers and classes
//! - Check the menu tree has the expected shape
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MenuConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use crate::config::schema::MenuConfig;
use crate::metadata::Marker;
use crate::options::{is_empty_value, OptionSet, CHILDREN};
use crate::routing::{HandlerId, HandlerIdError};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("resolver.max_depth must be at least 1")]
    ZeroMaxDepth,

    #[error("route `{0}` is defined more than once")]
    DuplicateRoute(String),

    #[error("{owner}: {source}")]
    InvalidController {
        owner: String,
        #[source]
        source: HandlerIdError,
    },

    #[error("handler `{0}` is registered more than once")]
    DuplicateHandler(String),

    #[error("class `{0}` is declared more than once")]
    DuplicateClass(String),

    #[error("{owner}: secure_param marker without a parameter name")]
    UnnamedSecureParam { owner: String },

    #[error("menu node `{path}` is malformed: {reason}")]
    MalformedNode { path: String, reason: String },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &MenuConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.resolver.max_depth == 0 {
        errors.push(ValidationError::ZeroMaxDepth);
    }

    let mut routes = HashSet::new();
    for route in &config.routes {
        if !routes.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateRoute(route.name.clone()));
        }
        if let Some(controller) = route.controller() {
            if let Err(source) = controller.parse::<HandlerId>() {
                errors.push(ValidationError::InvalidController {
                    owner: format!("route `{}`", route.name),
                    source,
                });
            }
        }
    }

    let mut handlers = HashSet::new();
    for handler in &config.handlers {
        let owner = format!("handler `{}`", handler.controller);
        match handler.controller.parse::<HandlerId>() {
            Ok(id) => {
                if !handlers.insert(id) {
                    errors.push(ValidationError::DuplicateHandler(handler.controller.clone()));
                }
            }
            Err(source) => errors.push(ValidationError::InvalidController {
                owner: owner.clone(),
                source,
            }),
        }
        check_markers(&handler.markers, &owner, &mut errors);
    }

    let mut classes = HashSet::new();
    for class in &config.classes {
        if !classes.insert(class.name.as_str()) {
            errors.push(ValidationError::DuplicateClass(class.name.clone()));
        }
        check_markers(&class.markers, &format!("class `{}`", class.name), &mut errors);
    }

    for (name, root) in &config.menu.tree {
        check_node(root, name, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_markers(markers: &[Marker], owner: &str, errors: &mut Vec<ValidationError>) {
    for marker in markers {
        if let Marker::SecureParam { name, .. } = marker {
            if name.is_empty() {
                errors.push(ValidationError::UnnamedSecureParam {
                    owner: owner.to_string(),
                });
            }
        }
    }
}

fn check_node(node: &OptionSet, path: &str, errors: &mut Vec<ValidationError>) {
    match node.get(CHILDREN) {
        None => {}
        Some(Value::Object(children)) => {
            for (name, child) in children {
                let child_path = format!("{}/{}", path, name);
                match child {
                    Value::Object(child) => check_node(child, &child_path, errors),
                    child if is_empty_value(child) => {}
                    _ => errors.push(ValidationError::MalformedNode {
                        path: child_path,
                        reason: "expected a mapping".into(),
                    }),
                }
            }
        }
        Some(children) if is_empty_value(children) => {}
        Some(_) => errors.push(ValidationError::MalformedNode {
            path: path.to_string(),
            reason: "`children` must be a mapping".into(),
        }),
    }
}
