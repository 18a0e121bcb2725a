//! Navigation layer.
//!
//! # Data Flow
//! ```text
//! navigate(target)
//!     → HistoryMode extracts the path
//!     → Resolver (exact lookup)
//!     → on match: record in History, render the view
//!     → on NotFound: error to the caller, history untouched
//! ```
//!
//! # Design Decisions
//! - Rendering replaces the displayed view; it never feeds back into the
//!   table, so resolving twice yields the same entry both times
//! - NotFound is the caller's to handle (fallback view); the navigator
//!   performs no recovery
//! - back()/forward() re-resolve recorded paths; the table is immutable,
//!   so those resolutions cannot fail

use crate::history::{History, HistoryMode, MemoryHistory};
use crate::routing::{ResolveError, Resolver};

/// Output of a successful navigation: the matched route and its view's
/// rendered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub route: String,
    pub body: String,
}

/// Ties resolution to history tracking and the render side effect.
pub struct Navigator {
    resolver: Resolver,
    history: Box<dyn History>,
    mode: HistoryMode,
}

impl Navigator {
    pub fn new(resolver: Resolver, mode: HistoryMode) -> Self {
        Self::with_history(resolver, mode, Box::new(MemoryHistory::new()))
    }

    /// Use a caller-supplied history collaborator.
    pub fn with_history(resolver: Resolver, mode: HistoryMode, history: Box<dyn History>) -> Self {
        Self {
            resolver,
            history,
            mode,
        }
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// The path of the currently displayed view, if any navigation happened.
    pub fn current(&self) -> Option<&str> {
        self.history.current()
    }

    /// Resolve a target and display its view, recording a history entry.
    pub fn navigate(&mut self, target: &str) -> Result<Rendered, ResolveError> {
        let path = self.mode.extract_path(target);
        let entry = self.resolver.resolve(path)?;
        let rendered = Rendered {
            route: entry.name().to_string(),
            body: entry.view().render(),
        };
        let canonical = entry.path().to_string();
        self.history.push(&canonical);
        tracing::info!(path = %canonical, route = %rendered.route, "navigated");
        Ok(rendered)
    }

    /// Like [`navigate`](Self::navigate), but replaces the current history
    /// entry instead of pushing a new one.
    pub fn redirect(&mut self, target: &str) -> Result<Rendered, ResolveError> {
        let path = self.mode.extract_path(target);
        let entry = self.resolver.resolve(path)?;
        let rendered = Rendered {
            route: entry.name().to_string(),
            body: entry.view().render(),
        };
        let canonical = entry.path().to_string();
        self.history.replace(&canonical);
        tracing::info!(path = %canonical, route = %rendered.route, "redirected");
        Ok(rendered)
    }

    /// Step back in history and re-display that view.
    pub fn back(&mut self) -> Option<Rendered> {
        let path = self.history.back()?;
        self.redisplay(&path)
    }

    /// Step forward in history and re-display that view.
    pub fn forward(&mut self) -> Option<Rendered> {
        let path = self.history.forward()?;
        self.redisplay(&path)
    }

    fn redisplay(&self, path: &str) -> Option<Rendered> {
        // Recorded paths are canonical entries from the immutable table;
        // look them up directly so the base is not stripped a second time.
        let entry = self.resolver.table().entry_by_path(path)?;
        Some(Rendered {
            route: entry.name().to_string(),
            body: entry.view().render(),
        })
    }
}
