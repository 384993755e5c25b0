//! SwagCheck CLI - Main Entry Point
//!
//! Command-line front end for running the storefront suites,
//! inspecting result files, and driving the standalone security
//! scripts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{brute_force, cipher_scan, config, list, report, run};

/// SwagCheck - black-box suite runner for the Swag Labs storefront
#[derive(Parser)]
#[command(name = "swagcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = "swagcheck.toml", env = "SWAGCHECK_CONFIG")]
    config: PathBuf,

    /// Storefront URL override
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Results directory override
    #[arg(long, global = true)]
    results_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run suites against the storefront
    Run(run::RunArgs),

    /// List suites, or the cases of one suite
    List(list::ListArgs),

    /// Summarize the result files on disk
    Report,

    /// Sweep username/password lists against the login form
    BruteForce(brute_force::BruteForceArgs),

    /// Enumerate the storefront's TLS ciphers with nmap
    CipherScan(cipher_scan::CipherScanArgs),

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    let mut config = swagcheck_harness::HarnessConfig::load(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(results_dir) = cli.results_dir {
        config.results_dir = results_dir;
    }

    match cli.command {
        Commands::Run(args) => run::execute(args, config, cli.format).await?,
        Commands::List(args) => list::execute(args, cli.format)?,
        Commands::Report => report::execute(&config, cli.format)?,
        Commands::BruteForce(args) => brute_force::execute(args, config, cli.format).await?,
        Commands::CipherScan(args) => cipher_scan::execute(args, &config).await?,
        Commands::Config(cmd) => config::execute(cmd, &cli.config, config, cli.format)?,
    }

    Ok(())
}
