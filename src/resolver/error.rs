//! Resolution errors.

use thiserror::Error;

/// Errors that abort a resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A security binding names an argument the handler does not declare.
    #[error("node `{node}`: handler `{handler}` has no argument `{param}` for its secure_param marker")]
    UnknownSecureParam {
        node: String,
        handler: String,
        param: String,
    },

    /// A node or its `children` has the wrong shape.
    #[error("node `{path}` is malformed: {reason}")]
    MalformedNode { path: String, reason: String },

    /// The tree nests deeper than allowed.
    #[error("node `{path}` exceeds the maximum tree depth of {limit}")]
    DepthExceeded { path: String, limit: usize },
}
