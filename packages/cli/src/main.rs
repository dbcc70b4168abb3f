mod commands;
mod config;
mod render;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{init, preview, shell, InitArgs, PreviewArgs, ShellArgs};
use config::Config;
use std::path::PathBuf;
use tracing::Level;

/// Schema Builder CLI - sketch a nested field schema and preview sample JSON
#[derive(Parser, Debug)]
#[command(name = "schemabuilder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./schemabuilder.config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default config file
    Init(InitArgs),

    /// Edit a schema interactively
    Shell(ShellArgs),

    /// Print the sample JSON for a list of fields
    Preview(PreviewArgs),
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>, cwd: &str) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(cwd),
    }
}

fn run(cli: Cli, cwd: &str) -> anyhow::Result<()> {
    match cli.command {
        Command::Init(args) => init(args, cwd),
        Command::Shell(args) => shell(args, &load_config(cli.config.as_ref(), cwd)?),
        Command::Preview(args) => preview(args, &load_config(cli.config.as_ref(), cwd)?),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    if let Err(err) = run(cli, &cwd) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
