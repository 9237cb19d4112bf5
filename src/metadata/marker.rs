//! Structural markers attached to controller methods and classes.

use serde::{Deserialize, Serialize};

use crate::options::OptionSet;

/// A metadata marker, tagged by `kind` in config files.
///
/// ```toml
/// markers = [
///     { kind = "menu", label = "Edit user" },
///     { kind = "secure", roles = ["ROLE_ADMIN"] },
///     { kind = "secure_param", name = "user", permissions = "EDIT" },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Marker {
    /// Security requirement bound to one handler argument.
    SecureParam {
        /// Name of the handler argument.
        #[serde(default)]
        name: String,
        #[serde(flatten)]
        fields: OptionSet,
    },
    /// Access requirement (roles) for the whole action.
    Secure {
        #[serde(flatten)]
        fields: OptionSet,
    },
    /// Menu options declared on the action.
    Menu {
        #[serde(flatten)]
        fields: OptionSet,
    },
    /// Any marker the resolver does not understand.
    #[serde(other)]
    Other,
}

impl Marker {
    pub fn menu(fields: OptionSet) -> Self {
        Marker::Menu { fields }
    }

    pub fn secure(fields: OptionSet) -> Self {
        Marker::Secure { fields }
    }

    pub fn secure_param(name: impl Into<String>, fields: OptionSet) -> Self {
        Marker::SecureParam {
            name: name.into(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Wrapper {
        markers: Vec<Marker>,
    }

    #[test]
    fn test_markers_from_toml() {
        let doc: Wrapper = toml::from_str(
            r#"
            markers = [
                { kind = "menu", label = "Edit" },
                { kind = "secure_param", name = "user", permissions = "EDIT" },
                { kind = "cache", maxage = 60 },
            ]
            "#,
        )
        .unwrap();

        match &doc.markers[0] {
            Marker::Menu { fields } => assert_eq!(fields["label"], json!("Edit")),
            other => panic!("unexpected marker {:?}", other),
        }
        match &doc.markers[1] {
            Marker::SecureParam { name, fields } => {
                assert_eq!(name, "user");
                assert_eq!(fields["permissions"], json!("EDIT"));
                assert!(!fields.contains_key("name"));
            }
            other => panic!("unexpected marker {:?}", other),
        }
        assert_eq!(doc.markers[2], Marker::Other);
    }
}
