//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → views bound by name at startup
//!     → RouteTable (frozen for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the table is never reloaded or torn
//!   down except at process exit
//! - All fields have defaults, so a missing config still yields the
//!   declared table
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports all errors, not just the first
//! - Views are not configuration: the file declares (path, name) pairs,
//!   binding to views happens in code

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{RouteSpec, RouterConfig};
pub use validation::{validate_config, ValidationError};
