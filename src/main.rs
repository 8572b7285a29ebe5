//! czmoji - CLI entry point.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use czmoji::commit::git_commit;
use czmoji::{TerminalPrompt, prompter, resolve_config};

/// Build a commit message interactively and commit it.
#[derive(Parser, Debug)]
#[command(name = "czmoji")]
#[command(about = "Build an emoji conventional commit message interactively")]
#[command(version)]
struct Cli {
    /// Print the message instead of committing
    #[arg(long)]
    dry_run: bool,

    /// Describe a breaking change to add to the message
    #[arg(long, value_name = "TEXT")]
    breaking: Option<String>,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    show_config: bool,

    /// Extra arguments passed to `git commit`
    #[arg(last = true)]
    git_args: Vec<String>,
}

fn main() {
    // Write to stderr so logs don't interfere with the prompts or --dry-run output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        for cause in e.chain().skip(1) {
            eprintln!("  Caused by: {cause}");
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        let config = resolve_config();
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
        println!("{json}");
        return Ok(());
    }

    let mut prompt = TerminalPrompt::new().with_breaking_change(cli.breaking);
    let dry_run = cli.dry_run;
    let git_args = cli.git_args;

    prompter(&mut prompt, |message| {
        if dry_run {
            println!("{message}");
            Ok(())
        } else {
            git_commit(&message, &git_args)
        }
    })
    .context("Failed to create commit")?;

    Ok(())
}
