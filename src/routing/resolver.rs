//! Route lookup.
//!
//! # Responsibilities
//! - Normalize navigation targets (empty string is the root path)
//! - Strip the configured application base before matching
//! - Look up the matching entry, or report an explicit NotFound
//!
//! # Design Decisions
//! - Resolution is a pure, synchronous table lookup; no I/O, no recovery
//! - NotFound is surfaced to the navigation layer, which owns the fallback
//! - The table is shared read-only, so the resolver is freely cloneable

use std::sync::Arc;

use thiserror::Error;

use crate::routing::table::{RouteEntry, RouteTable};

/// The single resolution failure: no entry matches the target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no route matches path {path:?}")]
    NotFound { path: String },
}

/// Maps navigation targets onto the immutable route table.
#[derive(Debug, Clone)]
pub struct Resolver {
    table: Arc<RouteTable>,
    base: String,
}

impl Resolver {
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self::with_base(table, "")
    }

    /// A non-empty base (e.g. `/app`) is stripped from targets before
    /// matching, so `/app/vault` resolves the `/vault` entry.
    pub fn with_base(table: Arc<RouteTable>, base: impl Into<String>) -> Self {
        Self {
            table,
            base: base.into(),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolve a navigation target to its route entry.
    pub fn resolve(&self, target: &str) -> Result<&RouteEntry, ResolveError> {
        let path = self.normalize(target);
        match self.table.entry_by_path(&path) {
            Some(entry) => {
                tracing::debug!(path = %path, route = %entry.name(), "route resolved");
                Ok(entry)
            }
            None => {
                tracing::warn!(path = %path, "no route matches");
                Err(ResolveError::NotFound { path })
            }
        }
    }

    fn normalize(&self, target: &str) -> String {
        let mut path = target;
        if !self.base.is_empty() {
            if let Some(rest) = path.strip_prefix(self.base.as_str()) {
                // Strip only at a segment boundary: base /app must not
                // mangle /apple.
                if rest.is_empty() || rest.starts_with('/') {
                    path = rest;
                }
            }
        }
        if path.is_empty() {
            "/".to_string()
        } else {
            path.to_string()
        }
    }
}
