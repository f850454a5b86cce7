//! Generation configuration.
//!
//! Loaded from `templates/config.json` under the project root. The first
//! invocation in a project bootstraps the templates directory from the
//! bundled default set; files already present are never overwritten, so
//! user edits survive.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::paths;

/// Bundled default templates, embedded at compile time and extracted on
/// first run so users can edit them in place.
mod defaults {
    pub const CONFIG_JSON: &str = include_str!("../resources/templates/config.json");
    pub const COMPONENT_JSX: &str = include_str!("../resources/templates/component.jsx");
    pub const HOOK_JS: &str = include_str!("../resources/templates/hook.js");
}

/// Output extension used when the config leaves `suffix` empty.
pub const DEFAULT_SUFFIX: &str = "jsx";

/// Generation defaults, deserialized from `templates/config.json`.
///
/// Every key is optional on disk; missing keys deserialize to their empty
/// defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Template used when prompts are skipped.
    pub default_template: String,

    /// Target directory used when prompts are skipped.
    pub default_target_directory: String,

    /// Per-template target directories, tried before prompting.
    pub templates: HashMap<String, String>,

    /// Output extension appended to file names that lack one.
    pub suffix: String,
}

impl Config {
    /// Load the project configuration, bootstrapping the templates
    /// directory from the bundled defaults when it does not exist yet.
    pub fn load(root: &Path) -> Result<Self> {
        let templates_dir = paths::templates_dir(root);
        if !templates_dir.exists() {
            bootstrap_templates(&templates_dir)?;
        }

        let config_path = paths::config_path(root);
        let raw = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;

        Ok(config)
    }
}

/// Extract the bundled default set into `dir`, leaving any file already
/// present untouched.
pub fn bootstrap_templates(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create templates directory: {}", dir.display()))?;

    write_if_absent(&dir.join("config.json"), defaults::CONFIG_JSON)?;
    write_if_absent(&dir.join("component.jsx"), defaults::COMPONENT_JSX)?;
    write_if_absent(&dir.join("hook.js"), defaults::HOOK_JS)?;

    Ok(())
}

fn write_if_absent(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
