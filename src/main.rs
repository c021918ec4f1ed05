mod cli;
mod config;
mod display;
mod editor;
mod error;
mod models;
mod renderer;
mod report;
mod vcs;

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::cli::gen::GenOptions;

/// Environment variable holding the log filter
const LOG_ENV: &str = "GOWEEK_LOG";

#[derive(Parser)]
#[command(name = "goweek", version)]
#[command(about = "Generate your weekly report with one click", long_about = None)]
struct Cli {
    /// git add, commit and push the weekly reports
    #[arg(short, long)]
    git: bool,

    /// Generate the weekly report of last week
    #[arg(short, long)]
    last_week: bool,

    /// Directory holding config.json and template.md (defaults to ~/.goweek)
    #[arg(short, long, env = "GOWEEK_HOME")]
    profile_dir: Option<PathBuf>,

    /// Print the filled report instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Do not open the report in the configured editor
    #[arg(long)]
    no_editor: bool,
}

fn main() {
    if env::var_os(LOG_ENV).is_none() {
        env::set_var(LOG_ENV, "warn");
    }
    pretty_env_logger::init_custom_env(LOG_ENV);

    let cli = Cli::parse();

    let result = config::resolve_profile(
        cli.profile_dir,
        env::var_os("USERPROFILE"),
        env::var_os("HOME"),
    )
    .and_then(|profile| {
        debug!("Using profile directory {}", profile.dir().display());
        if cli.git {
            cli::commit::run(&profile)
        } else {
            cli::gen::run(
                &profile,
                GenOptions {
                    last_week: cli.last_week,
                    dry_run: cli.dry_run,
                    no_editor: cli.no_editor,
                },
            )
        }
    });

    if let Err(e) = result {
        debug!("{:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
