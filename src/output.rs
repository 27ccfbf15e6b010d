//! SVG output and file path generation

use chrono::Local;
use std::io;
use std::path::{Path, PathBuf};
use svg::Document;
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Default file name for a generated sheet: `{timestamp}_{input_stem}.svg`.
pub fn default_file_name(input: &Path) -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("palette");
    format!("{timestamp}_{stem}.svg")
}

/// Resolve where the sheet should be saved.
///
/// | Scenario | Output |
/// |----------|--------|
/// | No `-o` argument | `{input_dir}/{timestamp}_{stem}.svg` |
/// | `-o file.svg` | `file.svg` |
/// | `-o dir/` (trailing slash or existing dir) | `dir/{timestamp}_{stem}.svg` |
pub fn generate_output_path(input: &Path, output_arg: Option<&Path>) -> PathBuf {
    match output_arg {
        Some(output) => {
            let is_dir = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();
            if is_dir {
                output.join(default_file_name(input))
            } else {
                output.to_path_buf()
            }
        }
        None => {
            let parent = input.parent().unwrap_or(Path::new(""));
            if parent.as_os_str().is_empty() {
                PathBuf::from(default_file_name(input))
            } else {
                parent.join(default_file_name(input))
            }
        }
    }
}

/// Save an SVG document, creating parent directories as needed.
///
/// # Errors
///
/// Returns `OutputError` when directory creation or the write fails;
/// failures are fatal for the invocation, there is no retry.
pub fn save_svg(document: &Document, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    svg::save(path, document)?;
    Ok(())
}
