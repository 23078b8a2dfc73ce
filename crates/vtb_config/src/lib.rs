//! Parsing and validation of `vtb.toml` generator configuration files.
//!
//! This crate reads the optional configuration file and produces a
//! strongly-typed [`VtbConfig`] holding the harness timing values and the
//! output file naming rules. Every setting has a default, so an absent file
//! behaves like an empty one.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{
    find_config, load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME,
};
pub use resolve::resolve_output_path;
pub use types::*;
