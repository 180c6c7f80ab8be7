//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Shortest line limit that still fits a verb and a few arguments.
const MIN_LINE_LEN: usize = 64;

/// Validation errors for configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server.name is required")]
    MissingServerName,
    #[error("server.name must not contain spaces, got '{0}'")]
    InvalidServerName(String),
    #[error("limits.max_line_len must be at least 64, got {0}")]
    LineLimitTooSmall(usize),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = &config.server.name;
    if name.is_empty() {
        errors.push(ValidationError::MissingServerName);
    } else if name.contains(' ') {
        // Used as a reply prefix, which ends at the first space.
        errors.push(ValidationError::InvalidServerName(name.clone()));
    }

    if config.limits.max_line_len < MIN_LINE_LEN {
        errors.push(ValidationError::LineLimitTooSmall(config.limits.max_line_len));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
