//! View boundary.
//!
//! # Responsibilities
//! - Define the opaque renderable unit a route points at
//! - Keep the router ignorant of view internals
//!
//! # Design Decisions
//! - Views are trait objects bound at startup and never reassigned
//! - The router only ever calls `render`; it never inspects a view
//! - Rendering is synchronous (resolution happens on the caller's thread)

use std::sync::Arc;

/// A renderable unit. Route entries hold these as opaque references.
pub trait View: Send + Sync {
    /// Produce the displayable output for this view.
    fn render(&self) -> String;
}

/// Plain text view, used by the CLI and as a test stand-in.
#[derive(Debug, Clone)]
pub struct TextView {
    body: String,
}

impl TextView {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Convenience for builder call sites that want an `Arc<dyn View>` directly.
    pub fn shared(body: impl Into<String>) -> Arc<dyn View> {
        Arc::new(Self::new(body))
    }
}

impl View for TextView {
    fn render(&self) -> String {
        self.body.clone()
    }
}
