//! Output path resolution for generated harness files.

use crate::types::OutputConfig;
use std::path::{Path, PathBuf};

/// Extension used when neither the config nor the input supplies one.
const FALLBACK_EXTENSION: &str = "vhd";

/// Returns the path of the harness generated for `input`.
///
/// The harness lives next to the input as `<stem><suffix>.<ext>`, where the
/// extension comes from the config if set, otherwise from the input file.
pub fn resolve_output_path(output: &OutputConfig, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = match &output.extension {
        Some(ext) => ext.clone(),
        None => input
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_EXTENSION.to_string()),
    };
    input.with_file_name(format!("{stem}{}.{ext}", output.suffix))
}
