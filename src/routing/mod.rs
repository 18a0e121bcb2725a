//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target (path string)
//!     → resolver.rs (normalize, strip base, exact lookup)
//!     → table.rs (ordered immutable entries)
//!     → Return: matched RouteEntry or NotFound
//!
//! Table Construction (at startup):
//!     (path, name, view) triples
//!     → RouteTableBuilder (explicit, no global registry)
//!     → Uniqueness checks (path, name)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable for the process lifetime
//! - Exact path equality only; no dynamic segments, no regex
//! - Deterministic: same target always resolves to the same entry
//! - Explicit NotFound rather than silent default
//! - Shared read-only state, so no locking discipline is needed

pub mod resolver;
pub mod table;

pub use resolver::{ResolveError, Resolver};
pub use table::{RouteEntry, RouteTable, RouteTableBuilder, TableError};
