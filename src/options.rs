//! Option resolution: from raw positional arguments to a fully specified
//! generation request.
//!
//! Four fields are resolved in order - template, target directory, file
//! name, properties - each short-circuiting when the arguments already
//! supply it. With `--yes` the whole interactive pass is bypassed and the
//! configured defaults are used verbatim.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::placeholder;
use crate::prompt::Prompt;
use crate::template;

/// Parameters for one generation run, built incrementally from positional
/// arguments and filled in the rest of the way by prompting.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub template: Option<String>,
    pub target_directory: Option<String>,
    pub file_name: Option<String>,
    pub properties: Vec<String>,
    pub skip_prompts: bool,
}

/// Fully resolved options, ready for rendering.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub template: String,
    /// Absolute target directory.
    pub target_directory: PathBuf,
    pub file_name: String,
    pub properties: Vec<String>,
}

impl Options {
    /// Map positional arguments onto option fields.
    ///
    /// The skip flag shifts the positional meaning: without it the order is
    /// `<template> <target-dir> <file-name> <properties...>`; with it the
    /// template and target directory come from the config and the
    /// positionals are `<file-name> <properties...>`.
    pub fn from_args(args: &[String], skip_prompts: bool, config: &Config) -> Self {
        if skip_prompts {
            Options {
                template: Some(config.default_template.clone()),
                target_directory: Some(config.default_target_directory.clone()),
                file_name: args.first().cloned(),
                properties: args.iter().skip(1).cloned().collect(),
                skip_prompts: true,
            }
        } else {
            Options {
                template: args.first().cloned(),
                target_directory: args.get(1).cloned(),
                file_name: args.get(2).cloned(),
                properties: args.iter().skip(3).cloned().collect(),
                skip_prompts: false,
            }
        }
    }
}

/// Resolve all four fields, prompting for whatever is missing.
///
/// Returns `Ok(None)` when the project has no templates: that case is
/// reported to the user here and generation stops cleanly.
pub fn resolve(
    options: Options,
    root: &Path,
    config: &Config,
    prompt: &mut dyn Prompt,
) -> Result<Option<Resolved>> {
    if options.skip_prompts {
        // Caller supplies everything; under-supplied properties are not
        // validated in this mode.
        return Ok(Some(Resolved {
            template: options.template.unwrap_or_default(),
            target_directory: root.join(options.target_directory.unwrap_or_default()),
            file_name: options.file_name.unwrap_or_default(),
            properties: options.properties,
        }));
    }

    let template = match resolve_template(&options, root, prompt)? {
        Some(template) => template,
        None => {
            eprintln!("{}", "Error: templates directory is empty".red());
            return Ok(None);
        }
    };

    let target_directory = resolve_target_directory(&options, &template, root, config, prompt)?;
    let file_name = resolve_file_name(&options, prompt)?;
    let properties = resolve_properties(options.properties, &template, root, prompt)?;

    Ok(Some(Resolved {
        template,
        target_directory,
        file_name,
        properties,
    }))
}

fn resolve_template(
    options: &Options,
    root: &Path,
    prompt: &mut dyn Prompt,
) -> Result<Option<String>> {
    let choices = template::available_templates(root)?;

    if choices.is_empty() {
        return Ok(None);
    }
    if choices.len() == 1 {
        return Ok(Some(choices[0].clone()));
    }
    if let Some(name) = &options.template {
        if choices.contains(name) {
            return Ok(Some(name.clone()));
        }
    }

    let answer = prompt.select("Please choose which template to use", &choices, 0)?;
    Ok(Some(answer))
}

/// Resolve `candidate` against the project root and keep it only when the
/// directory actually exists on disk.
fn existing_target(root: &Path, candidate: Option<&str>) -> Option<PathBuf> {
    let candidate = candidate?;
    if candidate.is_empty() {
        return None;
    }

    let path = root.join(candidate);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

fn resolve_target_directory(
    options: &Options,
    template: &str,
    root: &Path,
    config: &Config,
    prompt: &mut dyn Prompt,
) -> Result<PathBuf> {
    if let Some(path) = existing_target(root, options.target_directory.as_deref()) {
        return Ok(path);
    }
    if let Some(path) = existing_target(root, config.templates.get(template).map(String::as_str)) {
        return Ok(path);
    }

    // Retries until the user names a directory that exists. Bounded only by
    // the user's persistence.
    loop {
        let answer = prompt.input("Please input which target directory to create")?;
        if let Some(path) = existing_target(root, Some(&answer)) {
            return Ok(path);
        }
        eprintln!("{}", "Error: directory path does not exist.".red());
    }
}

fn resolve_file_name(options: &Options, prompt: &mut dyn Prompt) -> Result<String> {
    match &options.file_name {
        Some(name) => Ok(name.clone()),
        // any answer is accepted, the empty string included
        None => prompt.input("Please input which file name to create"),
    }
}

/// Prompt once per property the template requires beyond those already
/// supplied. Answers append in order; supplied values are never reordered.
fn resolve_properties(
    mut properties: Vec<String>,
    template: &str,
    root: &Path,
    prompt: &mut dyn Prompt,
) -> Result<Vec<String>> {
    let text = match template::read_template(root, template)? {
        Some(text) => text,
        None => return Ok(properties),
    };

    let wanted = placeholder::highest_index(&text);
    while properties.len() < wanted {
        let i = properties.len() + 1;
        let hint = placeholder::extract_label(&text, i)
            .unwrap_or_else(|| format!("no.{} parameter", i));
        let answer = prompt.input(&format!("Please input for {}", hint))?;
        properties.push(answer);
    }

    Ok(properties)
}
