//! Sale-bills command - parse a sale-bill register.

use std::path::PathBuf;

use clap::Args;

use suspense_core::models::SaleBill;
use suspense_core::{LedgerParser, SaleBillParser};

use super::{emit, fallback_year, load_config, read_input, OutputFormat};

/// Arguments for the sale-bills command.
#[derive(Args)]
pub struct SaleBillsArgs {
    /// Sale-bill register text file
    #[arg(required = true)]
    input: PathBuf,

    /// Year used when the register has no SALE FROM header
    #[arg(short, long)]
    year: Option<i32>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub fn run(args: SaleBillsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = read_input(&args.input)?;
    let year = args.year.unwrap_or_else(|| fallback_year(&config));

    let bills = SaleBillParser::new().parse(&text, year);

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&bills)?,
        OutputFormat::Csv => format_csv(&bills)?,
        OutputFormat::Text => format_text(&bills),
    };

    emit(&output, args.output.as_deref())
}

fn format_csv(bills: &[SaleBill]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["bill_number", "date", "party_name", "amount", "is_cash_sale"])?;

    for bill in bills {
        wtr.write_record([
            bill.bill_number.clone(),
            bill.date.to_string(),
            bill.party_name.clone(),
            bill.amount.to_string(),
            bill.is_cash_sale.to_string(),
        ])?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn format_text(bills: &[SaleBill]) -> String {
    let mut output = String::new();
    for bill in bills {
        let cash = if bill.is_cash_sale { "  [cash]" } else { "" };
        output.push_str(&format!(
            "{}  {}  {}  {}{}\n",
            bill.bill_number, bill.date, bill.party_name, bill.amount, cash
        ));
    }
    output.push_str(&format!("\n{} bills", bills.len()));
    output
}
