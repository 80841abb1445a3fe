//! Extract command - show the payment identifiers in one narration.

use clap::Args;

use suspense_core::IdentifierExtractor;

use super::OutputFormat;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Bank narration text
    #[arg(required = true)]
    narration: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let identifiers = IdentifierExtractor::new().extract(&args.narration);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&identifiers)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["type", "value"])?;
            for id in &identifiers {
                wtr.write_record([id.kind.as_str(), id.value.as_str()])?;
            }
            print!("{}", String::from_utf8(wtr.into_inner()?)?);
        }
        OutputFormat::Text => {
            if identifiers.is_empty() {
                println!("{} No identifiers found", console::style("ℹ").blue());
            }
            for id in &identifiers {
                println!("{:<16} {}", id.kind, id.value);
            }
        }
    }

    Ok(())
}
