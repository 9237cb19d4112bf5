//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Menu node (route name, or node name as fallback)
//!     → router.rs (route lookup by name)
//!     → handler.rs (parse `Class::method` controller)
//!     → Return: HandlerId or not found
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Parse controller strings
//!     → Freeze as immutable StaticRouteTable
//! ```
//!
//! # Design Decisions
//! - Route table is a capability trait so embedders can plug their own router
//! - A missing route or a route without controller is an expected outcome
//! - Immutable after construction

pub mod handler;
pub mod router;

pub use handler::{HandlerId, HandlerIdError};
pub use router::{RouteEntry, RouteTable, StaticRouteTable};
