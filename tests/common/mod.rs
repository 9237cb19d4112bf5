//! Shared fixtures for resolver integration tests.

use menu_options::metadata::{HandlerRegistry, Marker, Parameter};
use menu_options::options::OptionSet;
use menu_options::routing::{HandlerId, RouteEntry, StaticRouteTable};
use serde_json::Value;

pub const USER_CONTROLLER: &str = "App\\Controller\\UserController";

/// Turn a `json!` object into an option set.
pub fn set(value: Value) -> OptionSet {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {}", other),
    }
}

/// In-memory routes and handlers for one test.
#[derive(Default)]
pub struct Fixture {
    pub routes: StaticRouteTable,
    pub registry: HandlerRegistry,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `route` to `class::method` with the given parameters and method markers.
    pub fn action(
        mut self,
        route: &str,
        class: &str,
        method: &str,
        parameters: Vec<Parameter>,
        markers: Vec<Marker>,
    ) -> Self {
        let id = HandlerId::new(class, method);
        self.routes.insert(RouteEntry {
            name: route.into(),
            path: Some(format!("/{}", route)),
            handler: Some(id.clone()),
            defaults: OptionSet::new(),
        });
        self.registry.register_handler(id, parameters, markers);
        self
    }

    /// Declare `class::method` as inherited from `declaring_class`.
    pub fn declared_in(mut self, class: &str, method: &str, declaring_class: &str) -> Self {
        self.registry
            .set_declaring_class(&HandlerId::new(class, method), declaring_class);
        self
    }

    /// Attach class-level markers.
    pub fn class(mut self, class: &str, markers: Vec<Marker>) -> Self {
        self.registry.register_class(class, markers);
        self
    }

    /// A route without a bound controller.
    pub fn unbound_route(mut self, route: &str) -> Self {
        self.routes.insert(RouteEntry {
            name: route.into(),
            path: Some(format!("/{}", route)),
            handler: None,
            defaults: OptionSet::new(),
        });
        self
    }
}
