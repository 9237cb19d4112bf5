//! Option sets for menu nodes.
//!
//! # Data Flow
//! ```text
//! raw node (from config loader)
//!     → strip_empty (drop unset-but-present keys)
//!     → add_missing(named entry)      node-local keys win
//!     → add_missing(handler metadata)
//!     → add_missing(defaults())       every recognized key present
//!     → resolved node
//! ```
//!
//! # Design Decisions
//! - An option set is an ordered JSON object, so output keeps declaration order
//! - Overlays never overwrite: precedence comes from the order of application
//! - `false` and `0` are explicit values and survive stripping

pub mod defaults;

use serde_json::{Map, Value};

pub use defaults::defaults;

/// Configuration of a single menu node: option key to value.
pub type OptionSet = Map<String, Value>;

/// Key holding the nested child nodes of a menu node.
pub const CHILDREN: &str = "children";

/// Returns true when a value counts as unset for merging purposes.
///
/// Null, the empty string and empty arrays or objects are unset.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Merge helpers for [`OptionSet`].
pub trait OptionSetExt {
    /// Remove every key whose value is empty.
    fn strip_empty(&mut self);

    /// Copy keys from `other` that are not already present ("add if absent").
    fn add_missing(&mut self, other: &OptionSet);

    /// True if `key` is present with a non-empty value.
    fn is_set(&self, key: &str) -> bool;

    /// String value of `key`, if present and non-empty.
    fn str_value(&self, key: &str) -> Option<&str>;

    /// Copy of this set with every empty value dropped.
    fn non_empty(&self) -> OptionSet;
}

impl OptionSetExt for OptionSet {
    fn strip_empty(&mut self) {
        self.retain(|_, value| !is_empty_value(value));
    }

    fn add_missing(&mut self, other: &OptionSet) {
        for (key, value) in other {
            if !self.contains_key(key) {
                self.insert(key.clone(), value.clone());
            }
        }
    }

    fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !is_empty_value(v))
    }

    fn str_value(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    fn non_empty(&self) -> OptionSet {
        self.iter()
            .filter(|(_, v)| !is_empty_value(v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(value: Value) -> OptionSet {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_empty_values() {
        assert!(is_empty_value(&json!(null)));
        assert!(is_empty_value(&json!("")));
        assert!(is_empty_value(&json!([])));
        assert!(is_empty_value(&json!({})));

        assert!(!is_empty_value(&json!(false)));
        assert!(!is_empty_value(&json!(0)));
        assert!(!is_empty_value(&json!("0")));
        assert!(!is_empty_value(&json!(["ROLE_USER"])));
    }

    #[test]
    fn test_strip_empty_keeps_explicit_flags() {
        let mut options = set(json!({
            "label": "",
            "uri": null,
            "attributes": {},
            "roles": [],
            "display": false,
            "name": "home",
        }));
        options.strip_empty();

        assert_eq!(options, set(json!({"display": false, "name": "home"})));
    }

    #[test]
    fn test_add_missing_does_not_overwrite() {
        let mut options = set(json!({"label": "A"}));
        options.add_missing(&set(json!({"label": "B", "route": "home"})));

        assert_eq!(options["label"], json!("A"));
        assert_eq!(options["route"], json!("home"));
    }

    #[test]
    fn test_str_value_ignores_empty_strings() {
        let options = set(json!({"uri": "", "route": "home", "display": true}));

        assert_eq!(options.str_value("uri"), None);
        assert_eq!(options.str_value("route"), Some("home"));
        assert_eq!(options.str_value("display"), None);
        assert!(!options.is_set("uri"));
        assert!(options.is_set("display"));
    }
}
