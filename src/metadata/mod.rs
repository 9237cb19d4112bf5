//! Handler metadata subsystem.
//!
//! # Data Flow
//! ```text
//! HandlerId
//!     → provider.rs (parameters, declaring class, method/class markers)
//!     → extract.rs (markers → option fragment)
//!     → fragment merged into the node by the resolver
//! ```
//!
//! # Design Decisions
//! - Markers are a closed enum; unknown kinds deserialize to `Other` and are skipped
//! - Introspection is backed by registered tables, not runtime reflection
//! - Extraction is pure: same markers and arguments, same fragment

pub mod extract;
pub mod marker;
pub mod provider;

pub use extract::{extract_fragments, ExtractError};
pub use marker::Marker;
pub use provider::{HandlerIntrospection, HandlerRegistry, MetadataProvider, Parameter};
