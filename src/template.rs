//! Template store: the files under `<root>/templates/`.
//!
//! A template is identified by name and stored as `<name>.<ext>` with one
//! of the four recognized code extensions. The `config` entry in the same
//! directory is the configuration file, never a template.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::paths;

/// Recognized template (and output) file extensions, in lookup order.
pub const TEMPLATE_EXTENSIONS: [&str; 4] = ["js", "ts", "jsx", "tsx"];

/// Names of the templates available in the project, sorted.
pub fn available_templates(root: &Path) -> Result<Vec<String>> {
    let dir = paths::templates_dir(root);
    let entries = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read templates directory: {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        let stem = file_name.split('.').next().unwrap_or_default();
        if stem.is_empty() || stem == "config" {
            continue;
        }
        names.push(stem.to_string());
    }

    names.sort();
    names.dedup();
    Ok(names)
}

/// Raw text of template `name`, trying each recognized extension in order.
/// `None` when no template file by that name exists.
pub fn read_template(root: &Path, name: &str) -> Result<Option<String>> {
    for ext in TEMPLATE_EXTENSIONS {
        let path = paths::templates_dir(root).join(format!("{}.{}", name, ext));
        if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read template: {}", path.display()))?;
            return Ok(Some(text));
        }
    }

    Ok(None)
}
