//! Design-tool tokens export
//!
//! Writes the parsed palette as a nested `{ group: { label: hex } }` JSON
//! document for interchange with design-tool token importers. Group and
//! label order match the palette file.

use crate::models::Palette;
use indexmap::IndexMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for tokens export failures
#[derive(Debug, Error)]
pub enum ExportError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File name for the tokens document: `{input_stem}_tokens.json`.
pub fn tokens_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("palette");
    format!("{stem}_tokens.json")
}

/// Resolve where the tokens document should be saved.
///
/// Same rules as the sheet output: explicit file wins, a directory (or
/// trailing slash) gets the default name, and with no argument the file
/// lands next to the input.
pub fn tokens_output_path(input: &Path, output_arg: Option<&Path>) -> PathBuf {
    match output_arg {
        Some(output) => {
            let is_dir = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();
            if is_dir {
                output.join(tokens_file_name(input))
            } else {
                output.to_path_buf()
            }
        }
        None => {
            let parent = input.parent().unwrap_or(Path::new(""));
            if parent.as_os_str().is_empty() {
                PathBuf::from(tokens_file_name(input))
            } else {
                parent.join(tokens_file_name(input))
            }
        }
    }
}

/// Serialize the palette as pretty-printed group → label → hex JSON.
///
/// # Errors
///
/// Returns `ExportError` if serialization fails.
pub fn tokens_to_string(palette: &Palette) -> Result<String, ExportError> {
    let mut grouped: IndexMap<&str, IndexMap<&str, &str>> = IndexMap::new();
    for (group, entries) in palette.groups() {
        let labels = grouped.entry(group).or_default();
        for entry in entries {
            labels.insert(entry.label.as_str(), entry.color.as_str());
        }
    }
    Ok(serde_json::to_string_pretty(&grouped)?)
}

/// Write the tokens document, creating parent directories as needed.
pub fn write_tokens(palette: &Palette, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, tokens_to_string(palette)?)?;
    Ok(())
}
