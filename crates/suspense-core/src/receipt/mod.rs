//! Receipt-book and sale-bill parsing.
//!
//! Parsing is total: malformed lines are absorbed into the current entry's
//! narration or skipped, never reported as errors.

mod dates;
mod lines;
mod location;
mod mode;
mod parser;
mod sale_bill;

pub use dates::{calendar_date, detect_year, month_number};
pub use lines::{classify_line, is_party_line, split_trailing_amount, strip_invoice_reference, LineKind};
pub use location::Gazetteer;
pub use mode::{cash_deposit_fields, detect_payment_mode};
pub use parser::{LedgerParser, ReceiptParser};
pub use sale_bill::{header_year, SaleBillParser};

use crate::models::{ImportRecord, ParsedTransaction, SaleBill};

/// Parse a receipt book with the built-in gazetteer.
pub fn parse(text: &str, year: i32) -> Vec<ParsedTransaction> {
    ReceiptParser::new().parse(text, year)
}

/// Parse a receipt book, preferring the header year over `fallback_year`.
pub fn parse_with_auto_year(text: &str, fallback_year: i32) -> Vec<ParsedTransaction> {
    ReceiptParser::new().parse_with_auto_year(text, fallback_year)
}

/// Parse a sale-bill register.
pub fn parse_sale_bills(text: &str, default_year: i32) -> Vec<SaleBill> {
    SaleBillParser::new().parse(text, default_year)
}

/// Parse a receipt book and pair every transaction with its identifiers.
pub fn prepare_import(text: &str, year: i32) -> Vec<ImportRecord> {
    ReceiptParser::new().prepare_import(text, year)
}
