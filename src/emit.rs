//! Output emission: suffix inference and the final write.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_SUFFIX;
use crate::template::TEMPLATE_EXTENSIONS;

/// Absolute output path for the generated file.
///
/// File names already ending in a recognized code extension are used
/// as-is; anything else gets the configured suffix appended, falling back
/// to `jsx` when the config leaves it empty.
pub fn resolve_output_path(target_directory: &Path, file_name: &str, suffix: &str) -> PathBuf {
    let has_code_extension = TEMPLATE_EXTENSIONS
        .iter()
        .any(|ext| file_name.ends_with(&format!(".{}", ext)));

    if has_code_extension {
        target_directory.join(file_name)
    } else {
        let suffix = if suffix.is_empty() { DEFAULT_SUFFIX } else { suffix };
        target_directory.join(format!("{}.{}", file_name, suffix))
    }
}

/// Write the rendered text, overwriting whatever is already at `path`.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
