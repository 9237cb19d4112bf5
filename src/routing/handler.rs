//! Handler identity: the controller action bound to a route.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Reference to a controller method, written `Class::method`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId {
    /// Fully qualified class name.
    pub class: String,
    /// Method name.
    pub method: String,
}

impl HandlerId {
    pub fn new(class: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.class, self.method)
    }
}

/// Controller string that is not of the form `Class::method`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid controller `{0}`: expected `Class::method`")]
pub struct HandlerIdError(pub String);

impl FromStr for HandlerId {
    type Err = HandlerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once("::") {
            Some((class, method)) if !class.is_empty() && !method.is_empty() => {
                Ok(HandlerId::new(class, method))
            }
            _ => Err(HandlerIdError(s.to_string())),
        }
    }
}
