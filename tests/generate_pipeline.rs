//! End-to-end pipeline tests over a throwaway project: configuration load
//! (with first-run bootstrap), option resolution against scripted prompts,
//! rendering, and emission.

use anyhow::Result;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use stencil::options::{self, Options};
use stencil::prompt::Prompt;
use stencil::{emit, paths, placeholder, template, Config};

struct ScriptedPrompt {
    answers: VecDeque<String>,
}

impl ScriptedPrompt {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn input(&mut self, _message: &str) -> Result<String> {
        Ok(self.answers.pop_front().expect("prompt script exhausted"))
    }

    fn select(&mut self, _message: &str, choices: &[String], default: usize) -> Result<String> {
        match self.answers.pop_front() {
            Some(answer) if !answer.is_empty() => Ok(answer),
            _ => Ok(choices[default].clone()),
        }
    }
}

fn project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(paths::PROJECT_MARKER), "{}").unwrap();
    temp_dir
}

/// Run the whole pipeline the way the generate command does, minus the
/// stdin-backed prompt.
fn generate(
    root: &Path,
    args: &[&str],
    skip_prompts: bool,
    prompt: &mut dyn Prompt,
) -> Result<Option<std::path::PathBuf>> {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();

    let config = Config::load(root)?;
    let options = Options::from_args(&args, skip_prompts, &config);

    let resolved = match options::resolve(options, root, &config, prompt)? {
        Some(resolved) => resolved,
        None => return Ok(None),
    };

    let text = template::read_template(root, &resolved.template)?
        .expect("resolved template must exist");
    let rendered = placeholder::render(&text, &resolved.file_name, &resolved.properties);

    let output_path =
        emit::resolve_output_path(&resolved.target_directory, &resolved.file_name, &config.suffix);
    emit::write_output(&output_path, &rendered)?;
    Ok(Some(output_path))
}

#[test]
fn generates_from_explicit_arguments() {
    let project = project();
    let templates_dir = paths::templates_dir(project.path());
    fs::create_dir_all(&templates_dir).unwrap();
    fs::write(
        templates_dir.join("counter.tsx"),
        "export const $0 = () => { return /$1:value/; }",
    )
    .unwrap();
    fs::write(templates_dir.join("config.json"), "{}").unwrap();
    fs::create_dir_all(project.path().join("src/components")).unwrap();

    let mut prompt = ScriptedPrompt::new(&[]);
    let output = generate(
        project.path(),
        &["counter", "src/components", "Counter.tsx", "42"],
        false,
        &mut prompt,
    )
    .unwrap()
    .unwrap();

    assert_eq!(output, project.path().join("src/components/Counter.tsx"));
    let body = fs::read_to_string(&output).unwrap();
    assert_eq!(body, "export const Counter = () => { return 42; }");
}

#[test]
fn prompts_fill_in_everything_missing() {
    let project = project();
    let templates_dir = paths::templates_dir(project.path());
    fs::create_dir_all(&templates_dir).unwrap();
    fs::write(templates_dir.join("counter.tsx"), "$0 starts at /$1:start/").unwrap();
    fs::write(templates_dir.join("config.json"), r#"{ "suffix": "tsx" }"#).unwrap();
    fs::create_dir_all(project.path().join("src/widgets")).unwrap();

    // target directory (one miss, one hit), file name, property
    let mut prompt = ScriptedPrompt::new(&["missing/dir", "src/widgets", "Timer", "0"]);
    let output = generate(project.path(), &[], false, &mut prompt)
        .unwrap()
        .unwrap();

    // no extension supplied, so the configured suffix is appended
    assert_eq!(output, project.path().join("src/widgets/Timer.tsx"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "Timer starts at 0");
}

#[test]
fn skip_mode_uses_bootstrapped_defaults() {
    let project = project();
    // no templates directory yet: Config::load bootstraps the bundled set
    fs::create_dir_all(project.path().join("src/components")).unwrap();

    let mut prompt = ScriptedPrompt::new(&[]);
    let output = generate(
        project.path(),
        &["Card.jsx", "card-root"],
        true,
        &mut prompt,
    )
    .unwrap()
    .unwrap();

    assert_eq!(output, project.path().join("src/components/Card.jsx"));
    let body = fs::read_to_string(&output).unwrap();
    assert!(body.contains("export const Card"));
    assert!(body.contains("className=\"card-root\""));
    assert!(!body.contains("$0"));
    assert!(!body.contains("/$1:"));
}

#[test]
fn empty_templates_directory_aborts_cleanly() {
    let project = project();
    let templates_dir = paths::templates_dir(project.path());
    fs::create_dir_all(&templates_dir).unwrap();
    fs::write(templates_dir.join("config.json"), "{}").unwrap();

    let mut prompt = ScriptedPrompt::new(&[]);
    let output = generate(project.path(), &[], false, &mut prompt).unwrap();
    assert!(output.is_none());
}

#[test]
fn generated_file_overwrites_previous_run() {
    let project = project();
    let templates_dir = paths::templates_dir(project.path());
    fs::create_dir_all(&templates_dir).unwrap();
    fs::write(templates_dir.join("tag.js"), "tag: $1").unwrap();
    fs::write(templates_dir.join("config.json"), r#"{ "suffix": "js" }"#).unwrap();
    fs::create_dir_all(project.path().join("lib")).unwrap();

    let mut first = ScriptedPrompt::new(&[]);
    generate(project.path(), &["tag", "lib", "tag", "one"], false, &mut first).unwrap();

    let mut second = ScriptedPrompt::new(&[]);
    let output = generate(project.path(), &["tag", "lib", "tag", "two"], false, &mut second)
        .unwrap()
        .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "tag: two");
}
