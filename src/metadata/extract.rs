//! Conversion of markers into option fragments.

use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::metadata::Marker;
use crate::options::{OptionSet, OptionSetExt};

/// Option key collecting per-argument security bindings.
pub const SECURE_PARAMS: &str = "secureParams";

/// Errors raised while turning markers into options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A security binding names an argument the handler does not declare.
    #[error("secure_param marker references unknown argument `{0}`")]
    UnknownParameter(String),
}

/// Merge a sequence of markers into one option fragment.
///
/// `arguments` maps handler argument names to their declared types.
/// Fields of `menu` and `secure` markers are first-write-wins; a later
/// `secure_param` for the same argument replaces the earlier binding.
pub fn extract_fragments(
    markers: &[Marker],
    arguments: &HashMap<String, String>,
) -> Result<OptionSet, ExtractError> {
    let mut fragment = OptionSet::new();

    for marker in markers {
        match marker {
            Marker::SecureParam { name, fields } => {
                let declared_type = arguments
                    .get(name)
                    .ok_or_else(|| ExtractError::UnknownParameter(name.clone()))?;

                let mut binding = Map::new();
                binding.insert("name".into(), Value::String(name.clone()));
                binding.add_missing(&fields.non_empty());
                binding.insert("class".into(), Value::String(declared_type.clone()));

                let bindings = fragment
                    .entry(SECURE_PARAMS)
                    .or_insert_with(|| Value::Object(Map::new()));
                if !bindings.is_object() {
                    *bindings = Value::Object(Map::new());
                }
                if let Value::Object(bindings) = bindings {
                    bindings.insert(name.clone(), Value::Object(binding));
                }
            }
            Marker::Secure { fields } | Marker::Menu { fields } => {
                fragment.add_missing(&fields.non_empty());
            }
            Marker::Other => {}
        }
    }

    Ok(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> OptionSet {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    fn arguments() -> HashMap<String, String> {
        HashMap::from([
            ("id".to_string(), "int".to_string()),
            ("user".to_string(), "App\\Entity\\User".to_string()),
        ])
    }

    #[test]
    fn test_first_marker_wins() {
        let markers = vec![
            Marker::menu(fields(json!({"label": "First", "type": null}))),
            Marker::secure(fields(json!({"roles": ["ROLE_ADMIN"]}))),
            Marker::menu(fields(json!({"label": "Second", "type": "divider"}))),
        ];

        let fragment = extract_fragments(&markers, &HashMap::new()).unwrap();
        assert_eq!(fragment["label"], json!("First"));
        assert_eq!(fragment["type"], json!("divider"));
        assert_eq!(fragment["roles"], json!(["ROLE_ADMIN"]));
    }

    #[test]
    fn test_secure_param_records_argument_type() {
        let markers = vec![Marker::secure_param(
            "user",
            fields(json!({"expression": "hasRole('ADMIN')", "permissions": null})),
        )];

        let fragment = extract_fragments(&markers, &arguments()).unwrap();
        assert_eq!(
            fragment[SECURE_PARAMS]["user"],
            json!({"name": "user", "expression": "hasRole('ADMIN')", "class": "App\\Entity\\User"})
        );
    }

    #[test]
    fn test_later_secure_param_replaces_binding() {
        let markers = vec![
            Marker::secure_param("user", fields(json!({"permissions": "VIEW"}))),
            Marker::secure_param("user", fields(json!({"permissions": "EDIT"}))),
        ];

        let fragment = extract_fragments(&markers, &arguments()).unwrap();
        assert_eq!(
            fragment[SECURE_PARAMS],
            json!({"user": {"name": "user", "permissions": "EDIT", "class": "App\\Entity\\User"}})
        );
    }

    #[test]
    fn test_secure_param_unknown_argument() {
        let markers = vec![Marker::secure_param("ghost", OptionSet::new())];

        let err = extract_fragments(&markers, &arguments()).unwrap_err();
        assert_eq!(err, ExtractError::UnknownParameter("ghost".into()));
    }

    #[test]
    fn test_other_markers_ignored() {
        let markers = vec![Marker::Other, Marker::menu(OptionSet::new())];

        let fragment = extract_fragments(&markers, &arguments()).unwrap();
        assert!(fragment.is_empty());
    }
}
