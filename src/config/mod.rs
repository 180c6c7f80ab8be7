//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, ServerConfig)
//! - [`limits`]: Input limits configuration (LimitsConfig)
//! - [`parser`]: Reply policy for rejected and unknown lines (ParserConfig)
//! - [`validation`]: Startup checks on a loaded config

mod defaults;
mod limits;
mod parser;
mod types;
mod validation;

pub use limits::LimitsConfig;
pub use parser::ParserConfig;
pub use types::{Config, ConfigError, ServerConfig};
pub use validation::{ValidationError, validate};
