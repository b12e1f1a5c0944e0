//! Brew CLI - Developer harness for the product customization engine.
//!
//! Commands:
//! - `brew inspect` - Show a product's initial selection and totals
//! - `brew replay` - Replay a scripted event sequence through a session
//! - `brew config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, InspectArgs, ReplayArgs};

/// Brew CLI - Inspect and replay product customizations
#[derive(Parser)]
#[command(name = "brew")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the initial selection and totals of a product
    Inspect(InspectArgs),

    /// Replay a script of session events
    Replay(ReplayArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose { "brew_menu=debug" } else { "brew_menu=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Inspect(args) => commands::inspect::run(args, &ctx),
        Commands::Replay(args) => commands::replay::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
