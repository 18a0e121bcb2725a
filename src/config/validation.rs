//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route paths are absolute literals
//! - Enforce the static table invariants (unique paths, unique names)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use thiserror::Error;

use crate::config::schema::RouterConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route path {0:?} must start with '/'")]
    PathNotAbsolute(String),

    #[error("route name for path {0:?} must not be empty")]
    EmptyName(String),

    #[error("duplicate route path {0:?}")]
    DuplicatePath(String),

    #[error("duplicate route name {0:?}")]
    DuplicateName(String),

    #[error("base {0:?} must start with '/' and must not end with '/'")]
    InvalidBase(String),
}

/// Check every semantic invariant, collecting all violations.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.base.is_empty() && (!config.base.starts_with('/') || config.base.ends_with('/')) {
        errors.push(ValidationError::InvalidBase(config.base.clone()));
    }

    for (i, route) in config.routes.iter().enumerate() {
        if !route.path.starts_with('/') {
            errors.push(ValidationError::PathNotAbsolute(route.path.clone()));
        }
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyName(route.path.clone()));
        }
        for earlier in &config.routes[..i] {
            if earlier.path == route.path {
                errors.push(ValidationError::DuplicatePath(route.path.clone()));
            }
            if earlier.name == route.name {
                errors.push(ValidationError::DuplicateName(route.name.clone()));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
