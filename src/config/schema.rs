//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::history::HistoryMode;

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Application base prefix, stripped from targets before matching.
    /// Empty means the application is mounted at the root.
    pub base: String,

    /// History mode chosen at startup (path-based or hash-based).
    pub history_mode: HistoryMode,

    /// Route declarations, in resolution order.
    pub routes: Vec<RouteSpec>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base: String::new(),
            history_mode: HistoryMode::Path,
            routes: declared_routes(),
        }
    }
}

/// One declared route: a literal path bound to a view by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteSpec {
    /// Literal path, no dynamic segments.
    pub path: String,

    /// Unique, human-referenceable identifier.
    pub name: String,
}

impl RouteSpec {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

/// The declared route table.
pub fn declared_routes() -> Vec<RouteSpec> {
    vec![
        RouteSpec::new("/", "gateway"),
        RouteSpec::new("/hub", "hub"),
        RouteSpec::new("/vault", "vault"),
        RouteSpec::new("/coupons", "coupons"),
        RouteSpec::new("/poetry", "poetry"),
        RouteSpec::new("/shayari-generator", "shayari-generator"),
    ]
}
