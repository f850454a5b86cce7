//! Filesystem layout and project-root discovery.
//!
//! Every path the tool touches hangs off the project root - the nearest
//! ancestor directory carrying a `package.json`. This module defines WHERE
//! things live; the only I/O is the existence probing in
//! [`find_project_root`].
//!
//! ```text
//! <root>/
//! ├── package.json             # project marker
//! └── templates/
//!     ├── config.json          # generation defaults
//!     └── <name>.<ext>         # template files (js / ts / jsx / tsx)
//! ```

use std::path::{Path, PathBuf};

/// Marker file identifying the project root.
pub const PROJECT_MARKER: &str = "package.json";

/// Walk upward from `start` until a directory containing [`PROJECT_MARKER`]
/// is found. Returns `None` when the filesystem root is exhausted first.
///
/// The starting directory is an explicit parameter so callers outside a
/// process working directory (tests included) can anchor the walk anywhere.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(PROJECT_MARKER).exists() {
            return Some(current);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Templates directory: `<root>/templates/`
pub fn templates_dir(root: &Path) -> PathBuf {
    root.join("templates")
}

/// Generation config: `<root>/templates/config.json`
pub fn config_path(root: &Path) -> PathBuf {
    templates_dir(root).join("config.json")
}
