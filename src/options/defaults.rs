//! Baseline option values applied to every resolved node.

use serde_json::{json, Value};

use super::OptionSet;

/// Every option key a resolved node carries, with its baseline value.
pub fn defaults() -> OptionSet {
    let baseline = json!({
        "uri": null,
        "label": null,
        "name": null,
        "attributes": {},
        "linkAttributes": {},
        "childrenAttributes": {},
        "labelAttributes": {},
        "display": true,
        "displayChildren": true,
        "secureParams": {},
        "roles": [],
        "route": null,
        "routeAbsolute": false,
        "showNonAuthorized": false,
        "showAsText": false,
        "translateDomain": null,
        "translateParameters": {},
        "type": null,
    });

    match baseline {
        Value::Object(map) => map,
        _ => OptionSet::new(),
    }
}
