//! onepatch - convert kHs ONE presets between FXP, FXB, AU and Reason.

mod commands;
mod settings;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use settings::Settings;

#[derive(Parser)]
#[command(name = "onepatch")]
#[command(author, version, about = "kHs ONE preset converter", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (defaults to <config dir>/onepatch/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a preset or bank to another format
    Convert(commands::convert::ConvertArgs),

    /// Show the contents of a preset or bank
    Info(commands::info::InfoArgs),

    /// Pack and unpack FXB banks
    Bank(commands::bank::BankArgs),

    /// Show the effective settings and where they come from
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let loaded = Settings::load(cli.config.as_deref()).context("failed to load settings")?;

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, &loaded.settings),
        Commands::Info(args) => commands::info::run(args),
        Commands::Bank(args) => commands::bank::run(args, &loaded.settings),
        Commands::Config => commands::config::run(&loaded),
    }
}
