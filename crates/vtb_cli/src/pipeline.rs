//! Shared helpers for CLI commands: configuration resolution and reading
//! source text from files or standard input.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;
use vtb_config::{find_config, load_config, load_config_file, VtbConfig};

use crate::GlobalArgs;

/// Input name that stands for standard input.
pub const STDIN_NAME: &str = "-";

/// Resolves the configuration for this invocation.
///
/// If `--config` is given it must exist (a directory is searched for
/// `vtb.toml`). Otherwise the nearest `vtb.toml` above the current directory
/// is used, falling back to the built-in defaults when there is none.
pub fn resolve_config(global: &GlobalArgs) -> Result<VtbConfig, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        let config = if p.is_dir() {
            load_config(&p)?
        } else {
            load_config_file(&p)?
        };
        return Ok(config);
    }

    match find_config(&std::env::current_dir()?) {
        Some(path) => Ok(load_config_file(&path)?),
        None => {
            debug!("no vtb.toml found, using defaults");
            Ok(VtbConfig::default())
        }
    }
}

/// Returns `true` if `name` designates standard input.
pub fn is_stdin(name: &str) -> bool {
    name == STDIN_NAME
}

/// Returns how `name` is shown in diagnostics, `<stdin>` for standard input.
pub fn display_name(name: &str) -> &str {
    if is_stdin(name) {
        "<stdin>"
    } else {
        name
    }
}

/// Reads the full source text of `name`, or of standard input for `-`.
pub fn read_source(name: &str) -> io::Result<String> {
    if is_stdin(name) {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(Path::new(name))
    }
}
