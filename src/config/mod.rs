//! Configuration module for link-stacklog
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file kept next to the database.
//!
//! # Example
//!
//! ```no_run
//! use link_stacklog::config::load_config_or_default;
//! use std::path::Path;
//!
//! let config = load_config_or_default(Path::new("config.toml")).unwrap();
//! println!("Default log: {}", config.stack.default_log);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, StackConfig, DEFAULT_TIMEOUT_SECS};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, CONFIG_FILE};
