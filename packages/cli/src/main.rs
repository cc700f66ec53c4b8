mod commands;
mod config;
mod page_file;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{build, init, BuildArgs, InitArgs};
use tracing_subscriber::EnvFilter;

/// Blockpress CLI - Block-based page builder
#[derive(Parser, Debug)]
#[command(name = "blockpress")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Blockpress project
    Init(InitArgs),

    /// Build page files to static HTML
    Build(BuildArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Build(args) => build(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
