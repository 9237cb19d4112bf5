//! Handler introspection and marker lookup.
//!
//! # Responsibilities
//! - Report a handler's parameters and declaring class
//! - Report method-level and class-level markers
//! - Provide an in-memory registry populated from config
//!
//! # Design Decisions
//! - Unknown handlers have no parameters and no markers
//! - The declaring class defaults to the class part of the handler id

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::{ClassConfig, HandlerConfig};
use crate::metadata::Marker;
use crate::routing::{HandlerId, HandlerIdError};

/// A handler method parameter.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,

    /// Declared argument type.
    #[serde(rename = "type")]
    pub declared_type: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}

/// Capability: inspect a handler's signature.
pub trait HandlerIntrospection: std::fmt::Debug {
    /// Parameters of the handler method, in declaration order.
    fn parameters_of(&self, handler: &HandlerId) -> &[Parameter];

    /// Class declaring the handler method.
    fn declaring_class_of<'a>(&'a self, handler: &'a HandlerId) -> &'a str;
}

/// Capability: read markers off handlers and classes.
pub trait MetadataProvider: std::fmt::Debug {
    fn method_markers(&self, handler: &HandlerId) -> &[Marker];

    fn class_markers(&self, class: &str) -> &[Marker];
}

#[derive(Debug, Clone, Default)]
struct RegisteredHandler {
    declaring_class: Option<String>,
    parameters: Vec<Parameter>,
    markers: Vec<Marker>,
}

/// Registered handler signatures and markers.
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<HandlerId, RegisteredHandler>,
    classes: HashMap<String, Vec<Marker>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from config sections.
    pub fn from_config(
        handlers: &[HandlerConfig],
        classes: &[ClassConfig],
    ) -> Result<Self, HandlerIdError> {
        let mut registry = Self::new();

        for handler in handlers {
            let id: HandlerId = handler.controller.parse()?;
            registry.handlers.insert(
                id,
                RegisteredHandler {
                    declaring_class: handler.declaring_class.clone(),
                    parameters: handler.parameters.clone(),
                    markers: handler.markers.clone(),
                },
            );
        }

        for class in classes {
            registry
                .classes
                .entry(class.name.clone())
                .or_default()
                .extend(class.markers.iter().cloned());
        }

        tracing::debug!(
            handlers = registry.handlers.len(),
            classes = registry.classes.len(),
            "Handler registry built"
        );
        Ok(registry)
    }

    /// Register a handler method.
    pub fn register_handler(
        &mut self,
        id: HandlerId,
        parameters: Vec<Parameter>,
        markers: Vec<Marker>,
    ) -> &mut Self {
        self.handlers.insert(
            id,
            RegisteredHandler {
                declaring_class: None,
                parameters,
                markers,
            },
        );
        self
    }

    /// Override the declaring class of a registered handler.
    pub fn set_declaring_class(&mut self, id: &HandlerId, class: impl Into<String>) -> &mut Self {
        if let Some(handler) = self.handlers.get_mut(id) {
            handler.declaring_class = Some(class.into());
        }
        self
    }

    /// Append class-level markers.
    pub fn register_class(&mut self, class: impl Into<String>, markers: Vec<Marker>) -> &mut Self {
        self.classes.entry(class.into()).or_default().extend(markers);
        self
    }

    pub fn contains(&self, id: &HandlerId) -> bool {
        self.handlers.contains_key(id)
    }
}

impl HandlerIntrospection for HandlerRegistry {
    fn parameters_of(&self, handler: &HandlerId) -> &[Parameter] {
        self.handlers
            .get(handler)
            .map(|h| h.parameters.as_slice())
            .unwrap_or(&[])
    }

    fn declaring_class_of<'a>(&'a self, handler: &'a HandlerId) -> &'a str {
        self.handlers
            .get(handler)
            .and_then(|h| h.declaring_class.as_deref())
            .unwrap_or(&handler.class)
    }
}

impl MetadataProvider for HandlerRegistry {
    fn method_markers(&self, handler: &HandlerId) -> &[Marker] {
        self.handlers
            .get(handler)
            .map(|h| h.markers.as_slice())
            .unwrap_or(&[])
    }

    fn class_markers(&self, class: &str) -> &[Marker] {
        self.classes.get(class).map(Vec::as_slice).unwrap_or(&[])
    }
}
