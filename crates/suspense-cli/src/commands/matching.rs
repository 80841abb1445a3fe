//! Match command - rank parties known from ledgers against a narration.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use suspense_core::receipt::{detect_year, prepare_import};
use suspense_core::{Matcher, MemoryPartyStore, SearchOutcome};

use super::{fallback_year, load_config, read_input, OutputFormat};

/// Arguments for the match command.
#[derive(Args)]
pub struct MatchArgs {
    /// Bank narration to match
    #[arg(required = true)]
    narration: String,

    /// Receipt-book file to load as party history (repeatable)
    #[arg(short, long, required = true)]
    ledger: Vec<PathBuf>,

    /// Year for ledger entry dates
    #[arg(short, long)]
    year: Option<i32>,

    /// Show at most this many candidates
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn run(args: MatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let mut store = MemoryPartyStore::new();
    for path in &args.ledger {
        let text = read_input(path)?;
        let year = match args.year {
            Some(year) => year,
            None => detect_year(&text).unwrap_or_else(|| fallback_year(&config)),
        };
        let records = prepare_import(&text, year);
        store.ingest_all(&records);
        info!("Loaded {} transactions from {}", records.len(), path.display());
    }

    let matcher = Matcher::with_config(&store, config.matcher.clone());
    let mut outcome = matcher.search(&args.narration)?;
    if let Some(top) = args.top {
        outcome.candidates.truncate(top);
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Csv => print!("{}", format_csv(&outcome)?),
        OutputFormat::Text => print_text(&outcome),
    }

    Ok(())
}

fn format_csv(outcome: &SearchOutcome) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "party_name",
        "party_ids",
        "confidence",
        "matched_on",
        "transaction_count",
        "total_amount",
    ])?;

    for candidate in &outcome.candidates {
        let ids: Vec<String> = candidate.party_ids.iter().map(|id| id.to_string()).collect();
        let evidence: Vec<String> = candidate
            .matched_on
            .iter()
            .map(|m| format!("{}:{}", m.kind, m.value))
            .collect();
        wtr.write_record([
            candidate.party.name.clone(),
            ids.join(";"),
            format!("{:.2}", candidate.confidence),
            evidence.join(";"),
            candidate.transaction_count.to_string(),
            candidate.total_amount.to_string(),
        ])?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn print_text(outcome: &SearchOutcome) {
    println!("Identifiers:");
    for id in &outcome.identifiers {
        println!("  {:<16} {}", id.kind, id.value);
    }
    println!();

    if outcome.candidates.is_empty() {
        println!("{} No matching parties", style("ℹ").blue());
        return;
    }

    for (rank, candidate) in outcome.candidates.iter().enumerate() {
        println!(
            "{}. {} {}",
            rank + 1,
            style(&candidate.party.name).bold(),
            style(format!("{:.1}%", candidate.confidence)).green()
        );
        for evidence in &candidate.matched_on {
            println!("     matched {}: {}", evidence.kind, evidence.value);
        }
        println!(
            "     {} transactions, total {}",
            candidate.transaction_count, candidate.total_amount
        );
        for tx in &candidate.recent_transactions {
            println!("       {}  {}", tx.transaction_date, tx.amount);
        }
    }
}
