//! CLI application for receipt-book parsing and party matching.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::{config, extract, matching, parse, sale_bills};

/// Receipt-book ingestion - parse ledgers, extract payment identifiers, match parties
#[derive(Parser)]
#[command(name = "suspense")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a receipt-book dump into transactions
    Parse(parse::ParseArgs),

    /// Extract payment identifiers from a narration
    Extract(extract::ExtractArgs),

    /// Rank parties from ledgers against a narration
    Match(matching::MatchArgs),

    /// Parse a sale-bill register
    SaleBills(sale_bills::SaleBillsArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // RUST_LOG, when set, overrides -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Parse(args) => parse::run(args, config_path),
        Commands::Extract(args) => extract::run(args),
        Commands::Match(args) => matching::run(args, config_path),
        Commands::SaleBills(args) => sale_bills::run(args, config_path),
        Commands::Config(args) => config::run(args, config_path),
    }
}
