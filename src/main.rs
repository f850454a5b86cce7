use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Template-driven code scaffolding", long_about = None)]
struct Cli {
    /// Skip prompts and fall back to the configured defaults
    #[arg(short = 'y', long = "yes")]
    yes: bool,

    /// <template> <target-dir> <file-name> <properties...>, or with
    /// --yes: <file-name> <properties...>
    args: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.args.first().map(String::as_str) == Some("init") {
        return commands::init::execute();
    }

    commands::generate::execute(cli.args, cli.yes)
}
