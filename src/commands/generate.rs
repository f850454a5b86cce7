//! The generation pipeline: resolve options, render the template, write
//! the file.

use anyhow::{bail, Context, Result};
use std::path::Path;

use stencil::config::Config;
use stencil::options::{self, Options};
use stencil::prompt::StdinPrompt;
use stencil::{emit, paths, placeholder, template};

pub fn execute(args: Vec<String>, skip_prompts: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    run(&args, skip_prompts, &cwd)
}

/// The same pipeline with an explicit starting directory for the
/// project-root walk.
pub fn run(args: &[String], skip_prompts: bool, start_dir: &Path) -> Result<()> {
    let root = paths::find_project_root(start_dir).with_context(|| {
        format!("No {} found in any parent directory", paths::PROJECT_MARKER)
    })?;

    let config = Config::load(&root)?;
    let options = Options::from_args(args, skip_prompts, &config);

    let mut prompt = StdinPrompt;
    let resolved = match options::resolve(options, &root, &config, &mut prompt)? {
        Some(resolved) => resolved,
        // resolution already reported the failure
        None => return Ok(()),
    };

    let text = match template::read_template(&root, &resolved.template)? {
        Some(text) => text,
        None => bail!("Template not found: {}", resolved.template),
    };

    let rendered = placeholder::render(&text, &resolved.file_name, &resolved.properties);

    let output_path =
        emit::resolve_output_path(&resolved.target_directory, &resolved.file_name, &config.suffix);
    emit::write_output(&output_path, &rendered)?;

    println!("  ✓ Created {}", output_path.display());
    Ok(())
}
