//! Parse command - turn a receipt-book dump into transactions.

use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use suspense_core::receipt::detect_year;
use suspense_core::{ImportRecord, LedgerParser, ReceiptParser};

use super::{emit, fallback_year, load_config, read_input, OutputFormat};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Receipt-book text file
    #[arg(required = true)]
    input: PathBuf,

    /// Year for entry dates (default: ledger header, then config, then current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Attach extracted identifiers to each transaction
    #[arg(long)]
    with_identifiers: bool,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = read_input(&args.input)?;

    let year = match args.year {
        Some(year) => year,
        None => detect_year(&text).unwrap_or_else(|| fallback_year(&config)),
    };
    debug!("Parsing {} with year {}", args.input.display(), year);

    let parser = ReceiptParser::from_config(&config.parser);
    let records: Vec<ImportRecord> = if args.with_identifiers {
        parser.prepare_import(&text, year)
    } else {
        parser
            .parse(&text, year)
            .into_iter()
            .map(|transaction| ImportRecord {
                transaction,
                identifiers: Vec::new(),
            })
            .collect()
    };
    info!("{} transactions from {}", records.len(), args.input.display());

    let output = match args.format {
        OutputFormat::Json if args.with_identifiers => serde_json::to_string_pretty(&records)?,
        OutputFormat::Json => {
            let transactions: Vec<_> = records.iter().map(|r| &r.transaction).collect();
            serde_json::to_string_pretty(&transactions)?
        }
        OutputFormat::Csv => format_csv(&records, args.with_identifiers)?,
        OutputFormat::Text => format_text(&records),
    };

    emit(&output, args.output.as_deref())
}

fn format_csv(records: &[ImportRecord], with_identifiers: bool) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec![
        "date",
        "party_name",
        "location",
        "amount",
        "payment_mode",
        "cash_bank_code",
        "cash_bank_location",
        "narration",
    ];
    if with_identifiers {
        header.push("identifiers");
    }
    wtr.write_record(&header)?;

    for record in records {
        let tx = &record.transaction;
        let mut row = vec![
            tx.date.to_string(),
            tx.party_name.clone(),
            tx.location.clone(),
            tx.amount.to_string(),
            tx.payment_mode.to_string(),
            tx.cash_bank_code.clone().unwrap_or_default(),
            tx.cash_bank_location.clone().unwrap_or_default(),
            tx.narration.clone(),
        ];
        if with_identifiers {
            let ids: Vec<String> = record
                .identifiers
                .iter()
                .map(|id| format!("{}:{}", id.kind, id.value))
                .collect();
            row.push(ids.join(";"));
        }
        wtr.write_record(&row)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(records: &[ImportRecord]) -> String {
    let mut output = String::new();

    for record in records {
        let tx = &record.transaction;
        output.push_str(&format!("{}  {}", tx.date, tx.party_name));
        if !tx.location.is_empty() {
            output.push_str(&format!(" ({})", tx.location));
        }
        output.push_str(&format!("  {}  {}\n", tx.amount, tx.payment_mode));
        if !tx.narration.is_empty() {
            output.push_str(&format!("    {}\n", tx.narration));
        }
        for id in &record.identifiers {
            output.push_str(&format!("    {}: {}\n", id.kind, id.value));
        }
    }

    output.push_str(&format!("\n{} transactions", records.len()));
    output
}
