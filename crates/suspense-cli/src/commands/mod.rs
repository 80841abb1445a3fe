//! CLI subcommands.

pub mod config;
pub mod extract;
pub mod matching;
pub mod parse;
pub mod sale_bills;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use tracing::debug;

use suspense_core::SuspenseConfig;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("suspense")
        .join("config.json")
}

/// Load the explicit config file, else the default one if it exists, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<SuspenseConfig> {
    if let Some(path) = config_path {
        return Ok(SuspenseConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading config from {}", path.display());
        Ok(SuspenseConfig::from_file(&path)?)
    } else {
        Ok(SuspenseConfig::default())
    }
}

/// Year for undated ledgers: configured default, else the current year.
pub fn fallback_year(config: &SuspenseConfig) -> i32 {
    config
        .parser
        .default_year
        .unwrap_or_else(|| chrono::Local::now().year())
}

pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(fs::read_to_string(path)?)
}

/// Print to stdout or write to `output`.
pub fn emit(output: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output)?;
            println!(
                "{} Output written to {}",
                console::style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", output),
    }
    Ok(())
}
