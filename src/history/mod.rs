//! Navigation history.
//!
//! # Data Flow
//! ```text
//! Raw navigation target
//!     → HistoryMode (extract resolvable path: as-is, or hash fragment)
//!     → Resolver
//!     → on success: History.push / History.replace
//!
//! back()/forward() move a cursor over recorded entries; the navigation
//! layer re-resolves the returned path.
//! ```
//!
//! # Design Decisions
//! - The mode is a startup configuration choice and affects only how a raw
//!   target is turned into a path, never resolution itself
//! - History is a trait so an embedder can supply the platform's own
//!   history tracking; MemoryHistory is the in-process implementation
//! - push truncates the forward stack, matching browser semantics

use serde::{Deserialize, Serialize};

/// How raw navigation targets carry their path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// The target is the path itself (pushState style).
    #[default]
    Path,
    /// The path lives in the fragment (`/index.html#/vault` → `/vault`).
    Hash,
}

impl HistoryMode {
    /// Extract the resolvable path from a raw navigation target.
    pub fn extract_path<'a>(&self, target: &'a str) -> &'a str {
        match self {
            HistoryMode::Path => target,
            // No fragment means the root path; the resolver treats the
            // empty remainder as "/".
            HistoryMode::Hash => target.split_once('#').map_or("", |(_, frag)| frag),
        }
    }
}

/// External history-tracking collaborator (browser-style history API).
pub trait History: Send {
    /// Record a new entry, discarding anything ahead of the cursor.
    fn push(&mut self, path: &str);

    /// Replace the current entry in place.
    fn replace(&mut self, path: &str);

    /// Step back; `None` at the oldest entry.
    fn back(&mut self) -> Option<String>;

    /// Step forward; `None` at the newest entry.
    fn forward(&mut self) -> Option<String>;

    /// The entry the cursor points at, if any.
    fn current(&self) -> Option<&str>;
}

/// In-process history stack.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History for MemoryHistory {
    fn push(&mut self, path: &str) {
        if let Some(i) = self.cursor {
            self.entries.truncate(i + 1);
        }
        self.entries.push(path.to_string());
        self.cursor = Some(self.entries.len() - 1);
    }

    fn replace(&mut self, path: &str) {
        match self.cursor {
            Some(i) => self.entries[i] = path.to_string(),
            None => self.push(path),
        }
    }

    fn back(&mut self) -> Option<String> {
        let i = self.cursor?;
        if i == 0 {
            return None;
        }
        self.cursor = Some(i - 1);
        Some(self.entries[i - 1].clone())
    }

    fn forward(&mut self) -> Option<String> {
        let i = self.cursor?;
        if i + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(i + 1);
        Some(self.entries[i + 1].clone())
    }

    fn current(&self) -> Option<&str> {
        self.cursor.map(|i| self.entries[i].as_str())
    }
}
