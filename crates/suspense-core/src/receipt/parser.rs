//! Receipt-book state machine.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::extract::IdentifierExtractor;
use crate::models::{ImportRecord, ParsedTransaction, ParserConfig, PaymentMode};
use crate::patterns::{SUSPENSE_MARKER, TRANSACTION_DATE};

use super::dates::{calendar_date, detect_year, month_number};
use super::lines::{classify_line, split_trailing_amount, strip_invoice_reference, LineKind};
use super::location::Gazetteer;
use super::mode::{cash_deposit_fields, detect_payment_mode};

/// Trait for ledger-text parsers.
pub trait LedgerParser {
    /// The record each recognized entry becomes.
    type Record;

    /// Parse ledger text, dating entries in `year`.
    fn parse(&self, text: &str, year: i32) -> Vec<Self::Record>;
}

/// Parser for receipt-book dumps.
#[derive(Debug, Clone, Default)]
pub struct ReceiptParser {
    gazetteer: Gazetteer,
}

/// An open entry collecting narration lines.
struct PendingEntry {
    transaction: ParsedTransaction,
    narration: Vec<String>,
}

impl PendingEntry {
    fn new(transaction: ParsedTransaction) -> Self {
        Self {
            transaction,
            narration: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        let cleaned = strip_invoice_reference(line);
        if !cleaned.is_empty() {
            self.narration.push(cleaned);
        }
    }

    fn finish(self) -> ParsedTransaction {
        let mut tx = self.transaction;
        tx.narration = self.narration.join(" ");
        tx.payment_mode = detect_payment_mode(&tx.narration);
        if tx.payment_mode == PaymentMode::Cash {
            if let Some((code, location)) = cash_deposit_fields(&tx.narration) {
                tx.cash_bank_code = Some(code);
                tx.cash_bank_location = Some(location);
            }
        }
        tx
    }
}

impl ReceiptParser {
    /// Create a parser with the built-in gazetteer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser whose gazetteer includes the configured extras.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new().with_gazetteer(Gazetteer::from_config(config))
    }

    /// Set the gazetteer used for party/location splitting.
    pub fn with_gazetteer(mut self, gazetteer: Gazetteer) -> Self {
        self.gazetteer = gazetteer;
        self
    }

    /// Parse, taking the year from the ledger header when it has one.
    pub fn parse_with_auto_year(&self, text: &str, fallback_year: i32) -> Vec<ParsedTransaction> {
        let year = match detect_year(text) {
            Some(year) => {
                debug!("Detected ledger year {}", year);
                year
            }
            None => fallback_year,
        };
        self.parse(text, year)
    }

    /// Parse and run identifier extraction over each narration.
    pub fn prepare_import(&self, text: &str, year: i32) -> Vec<ImportRecord> {
        let extractor = IdentifierExtractor::new();
        self.parse(text, year)
            .into_iter()
            .map(|transaction| ImportRecord {
                identifiers: extractor.extract(&transaction.narration),
                transaction,
            })
            .collect()
    }

    /// Build a transaction from the `<party> [<location>] <amount>` part of a line.
    fn party_entry(&self, text: &str, date: NaiveDate) -> ParsedTransaction {
        let (party, amount) = split_trailing_amount(text.trim());
        let (name, location) = self.gazetteer.split_party_location(party);
        ParsedTransaction::new(date, name, location, amount)
    }

    fn dated_entry(&self, line: &str, year: i32) -> Option<ParsedTransaction> {
        let caps = TRANSACTION_DATE.captures(line)?;
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let Some(date) = calendar_date(year, month, day) else {
            warn!("Skipping entry with unrepresentable date: {}", line);
            return None;
        };
        let rest = caps.get(0).map_or("", |m| &line[m.end()..]);
        Some(self.party_entry(rest, date))
    }
}

fn is_suspense(tx: &ParsedTransaction) -> bool {
    tx.party_name.to_uppercase().contains(SUSPENSE_MARKER)
}

/// Keep an opened entry unless it is the house suspense account.
fn open(tx: ParsedTransaction) -> Option<PendingEntry> {
    if is_suspense(&tx) {
        debug!("Discarding suspense account entry dated {}", tx.date);
        None
    } else {
        Some(PendingEntry::new(tx))
    }
}

impl LedgerParser for ReceiptParser {
    type Record = ParsedTransaction;

    fn parse(&self, text: &str, year: i32) -> Vec<ParsedTransaction> {
        let mut transactions = Vec::new();
        let mut current: Option<PendingEntry> = None;
        let mut last_date: Option<NaiveDate> = None;

        for line in text.lines().map(str::trim) {
            match classify_line(line) {
                LineKind::Noise => {}
                LineKind::TransactionStart => {
                    if let Some(entry) = current.take() {
                        transactions.push(entry.finish());
                    }
                    if let Some(tx) = self.dated_entry(line, year) {
                        last_date = Some(tx.date);
                        current = open(tx);
                    }
                }
                LineKind::PartyContinuation => {
                    let Some(entry) = current.take() else {
                        continue;
                    };
                    transactions.push(entry.finish());
                    if let Some(date) = last_date {
                        current = open(self.party_entry(line, date));
                    }
                }
                LineKind::BankAccount | LineKind::Narration => {
                    if let Some(entry) = current.as_mut() {
                        entry.push_line(line);
                    }
                }
            }
        }

        if let Some(entry) = current {
            transactions.push(entry.finish());
        }

        info!("Parsed {} transactions", transactions.len());
        transactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn parse(text: &str) -> Vec<ParsedTransaction> {
        ReceiptParser::new().parse(text, 2025)
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[test]
    fn test_simple_upi_transaction() {
        let text = "\
Apr 1 UPMANYU TRADERS BIRHANA ROAD 11145.00
ICICI 192105002017 11145.00
UPI/512345678901/UPI/9450852076@YBL/HDFCBANK LTD/AXI123";
        let txs = parse(text);
        assert_eq!(txs.len(), 1);
        let tx = &txs[0];
        assert_eq!(tx.date, date(4, 1));
        assert_eq!(tx.party_name, "UPMANYU TRADERS BIRHANA");
        assert_eq!(tx.location, "ROAD");
        assert_eq!(tx.amount, Decimal::new(1114500, 2));
        assert_eq!(tx.payment_mode, PaymentMode::Upi);
        assert_eq!(
            tx.narration,
            "ICICI 192105002017 11145.00 UPI/512345678901/UPI/9450852076@YBL/HDFCBANK LTD/AXI123"
        );
    }

    #[test]
    fn test_entry_without_narration() {
        let txs = parse("Dec 26 SANDHYA MEDICAL LUCKNOW 5000.00");
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].party_name, "SANDHYA MEDICAL");
        assert_eq!(txs[0].location, "LUCKNOW");
        assert_eq!(txs[0].narration, "");
        assert_eq!(txs[0].payment_mode, PaymentMode::Other);
    }

    #[test]
    fn test_multi_party_entry() {
        let text = "\
May 3 GUPTA MEDICAL KANPUR 1000.00
SHARMA DRUG HOUSE 2000.00
ICICI 192105002017 3000.00
NEFT-SBIN125123456789-GUPTA MEDICAL-";
        let txs = parse(text);
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].party_name, "GUPTA MEDICAL");
        assert_eq!(txs[0].narration, "");
        assert_eq!(txs[0].payment_mode, PaymentMode::Other);
        assert_eq!(txs[1].party_name, "SHARMA DRUG HOUSE");
        assert_eq!(txs[1].location, "");
        assert_eq!(txs[1].date, date(5, 3));
        assert_eq!(txs[1].payment_mode, PaymentMode::Neft);
    }

    #[test]
    fn test_neft_in_narration_stays_with_party() {
        let text = "\
Apr 2 VIJAY MEDICAL STORE 900.00
ICICI 192105002017 900.00
NEFT_IN:null//SBINN52025042334823235/VIJAY MEDICAL STORE Ag. DDG000516";
        let txs = parse(text);
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].party_name, "VIJAY MEDICAL STORE");
        assert_eq!(txs[0].amount, Decimal::new(90000, 2));
        assert_eq!(
            txs[0].narration,
            "ICICI 192105002017 900.00 NEFT_IN:null//SBINN52025042334823235/VIJAY MEDICAL STORE"
        );
    }

    #[test]
    fn test_suspense_entries_are_discarded() {
        let text = "\
Dec 26 SUSPENSE A/C 500.00
UPI/512345678901/UPI/9450852076@YBL/HDFCBANK LTD/
GUPTA MEDICAL STORE 900.00
Dec 27 BABA MEDICAL STORE DELHI 700.00";
        let txs = parse(text);
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].party_name, "BABA MEDICAL STORE");
        assert_eq!(txs[0].date, date(12, 27));
    }

    #[test]
    fn test_cash_deposit_fields() {
        let text = "\
Jun 10 RAM MEDICAL STORE 5000.00
BY CASH -733300 TIRWA (UP) Ag. DDG000201";
        let txs = parse(text);
        assert_eq!(txs[0].narration, "BY CASH -733300 TIRWA (UP)");
        assert_eq!(txs[0].payment_mode, PaymentMode::Cash);
        assert_eq!(txs[0].cash_bank_code.as_deref(), Some("733300"));
        assert_eq!(txs[0].cash_bank_location.as_deref(), Some("TIRWA (UP)"));
    }

    #[test]
    fn test_noise_and_orphan_lines_ignored() {
        let text = "\
DURGA DAWA GHAR
RECEIPT BOOK
01-04-2025 - 30-06-2025
Date Particulars Debit Credit
UPI/ORPHAN/LINE
Apr 2 KRISHNA MEDICAL Kanpur 250.00
SUB TOTAL 250.00
...Continued";
        let txs = parse(text);
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].party_name, "KRISHNA MEDICAL");
        assert_eq!(txs[0].narration, "");
    }

    #[test]
    fn test_auto_year_from_header() {
        let text = "26-12-2024 - 05-01-2026\nJan 2 KRISHNA MEDICAL KANPUR 250.00";
        let txs = ReceiptParser::new().parse_with_auto_year(text, 2020);
        assert_eq!(txs[0].date, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());

        let txs = ReceiptParser::new().parse_with_auto_year("Jan 2 KRISHNA MEDICAL KANPUR 250.00", 2020);
        assert_eq!(txs[0].date, NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());
    }

    #[test]
    fn test_out_of_range_day_rolls_over() {
        let txs = parse("Feb 30 KRISHNA MEDICAL KANPUR 250.00");
        assert_eq!(txs[0].date, date(3, 2));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "\
Apr 1 UPMANYU TRADERS BIRHANA ROAD 11145.00
ICICI 192105002017 11145.00
SHARMA DRUG HOUSE 2000.00
MMT/IMPS/527412932576/DURGA/AGNIHOTRIM/UNION BANKOF I";
        assert_eq!(parse(text), parse(text));
    }
}
