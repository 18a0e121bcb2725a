//! Immutable route table.
//!
//! # Responsibilities
//! - Hold the ordered (path, name, view) entries
//! - Enforce uniqueness of paths and names at construction
//! - Offer exact lookup by path and by name
//!
//! # Design Decisions
//! - Built through an explicit builder; no implicit global registry
//! - The builder is consumed by `build()`, so "table built" → "ready to
//!   resolve" is the only transition and the table has no mutating methods
//! - O(n) scan is fine for typical table sizes

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::view::View;

/// Construction-time violation of the table invariants.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("duplicate route path {0:?}")]
    DuplicatePath(String),

    #[error("duplicate route name {0:?}")]
    DuplicateName(String),

    #[error("route name for path {0:?} must not be empty")]
    EmptyName(String),

    #[error("route path {0:?} must start with '/'")]
    InvalidPath(String),
}

/// One route: a literal path bound to a named, opaque view.
#[derive(Clone)]
pub struct RouteEntry {
    path: String,
    name: String,
    view: Arc<dyn View>,
}

impl RouteEntry {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> &dyn View {
        self.view.as_ref()
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The view is opaque; never reach into it for Debug output.
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Builder for [`RouteTable`]. Entries keep declaration order.
#[derive(Default)]
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
}

impl RouteTableBuilder {
    pub fn route(
        mut self,
        path: impl Into<String>,
        name: impl Into<String>,
        view: Arc<dyn View>,
    ) -> Self {
        self.entries.push(RouteEntry {
            path: path.into(),
            name: name.into(),
            view,
        });
        self
    }

    /// Validate the static invariants and freeze the table.
    pub fn build(self) -> Result<RouteTable, TableError> {
        for (i, entry) in self.entries.iter().enumerate() {
            if !entry.path.starts_with('/') {
                return Err(TableError::InvalidPath(entry.path.clone()));
            }
            if entry.name.is_empty() {
                return Err(TableError::EmptyName(entry.path.clone()));
            }
            for earlier in &self.entries[..i] {
                if earlier.path == entry.path {
                    return Err(TableError::DuplicatePath(entry.path.clone()));
                }
                if earlier.name == entry.name {
                    return Err(TableError::DuplicateName(entry.name.clone()));
                }
            }
        }
        Ok(RouteTable {
            entries: self.entries,
        })
    }
}

/// The immutable set of all routes known at startup.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Exact path match.
    pub fn entry_by_path(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Named-route lookup, exact match.
    pub fn entry_by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::TextView;

    fn sample_table() -> RouteTable {
        RouteTable::builder()
            .route("/", "gateway", TextView::shared("gateway"))
            .route("/hub", "hub", TextView::shared("hub"))
            .build()
            .unwrap()
    }

    #[test]
    fn preserves_declaration_order() {
        let table = sample_table();
        let names: Vec<&str> = table.iter().map(RouteEntry::name).collect();
        assert_eq!(names, vec!["gateway", "hub"]);
    }

    #[test]
    fn lookup_by_path_and_name() {
        let table = sample_table();
        assert_eq!(table.entry_by_path("/hub").unwrap().name(), "hub");
        assert_eq!(table.entry_by_name("gateway").unwrap().path(), "/");
        assert!(table.entry_by_path("/nope").is_none());
        assert!(table.entry_by_name("nope").is_none());
    }

    #[test]
    fn rejects_duplicate_path() {
        let err = RouteTable::builder()
            .route("/vault", "vault", TextView::shared("a"))
            .route("/vault", "other", TextView::shared("b"))
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::DuplicatePath(p) if p == "/vault"));
    }

    #[test]
    fn rejects_duplicate_name() {
        let err = RouteTable::builder()
            .route("/a", "poetry", TextView::shared("a"))
            .route("/b", "poetry", TextView::shared("b"))
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::DuplicateName(n) if n == "poetry"));
    }

    #[test]
    fn rejects_relative_path_and_empty_name() {
        let err = RouteTable::builder()
            .route("hub", "hub", TextView::shared("hub"))
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::InvalidPath(_)));

        let err = RouteTable::builder()
            .route("/hub", "", TextView::shared("hub"))
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::EmptyName(_)));
    }
}
