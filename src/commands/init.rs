//! First-run setup: make sure the templates directory exists with the
//! bundled default set in place.

use anyhow::{Context, Result};

use stencil::config::Config;
use stencil::paths;

pub fn execute() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let root = paths::find_project_root(&cwd).with_context(|| {
        format!("No {} found in any parent directory", paths::PROJECT_MARKER)
    })?;

    // loading bootstraps the templates directory when it is missing
    Config::load(&root)?;

    println!("  ✓ Templates ready at {}", paths::templates_dir(&root).display());
    Ok(())
}
