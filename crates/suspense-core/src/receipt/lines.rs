//! Line classification for receipt-book dumps.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::patterns::{
    BANK_ACCOUNT_LINE, INVOICE_REFERENCE, NARRATION_PREFIXES, NOISE_LINES, TRAILING_AMOUNT,
    TRANSACTION_DATE,
};

/// What a single trimmed ledger line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `<Month> <Day> <party> <amount>`.
    TransactionStart,
    /// Bank keyword, account digits and an amount.
    BankAccount,
    /// An undated party line sharing the previous entry's bank line.
    PartyContinuation,
    /// Anything else with content.
    Narration,
    /// Headers, footers, totals and blank lines.
    Noise,
}

/// Classify a trimmed line.
pub fn classify_line(line: &str) -> LineKind {
    if line.is_empty() || is_noise(line) {
        LineKind::Noise
    } else if TRANSACTION_DATE.is_match(line) {
        LineKind::TransactionStart
    } else if BANK_ACCOUNT_LINE.is_match(line) {
        LineKind::BankAccount
    } else if is_party_line(line) {
        LineKind::PartyContinuation
    } else {
        LineKind::Narration
    }
}

pub fn is_noise(line: &str) -> bool {
    NOISE_LINES.iter().any(|p| p.is_match(line))
}

/// Whether an undated line reads as `<party words> <amount>`.
///
/// An `Ag. ...` invoice reference is ignored, so its trailing digits never read as an amount.
pub fn is_party_line(line: &str) -> bool {
    let line = INVOICE_REFERENCE.replace(line, "");
    let line = line.trim();
    let Some(m) = TRAILING_AMOUNT.find(line) else {
        return false;
    };

    let upper = line.to_uppercase();
    if NARRATION_PREFIXES.iter().any(|p| upper.starts_with(p)) {
        return false;
    }
    if BANK_ACCOUNT_LINE.is_match(line) {
        return false;
    }

    let party = line[..m.start()].trim();
    party.split_whitespace().count() >= 2
        && party.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Split a trailing amount off `text`, returning the remainder and the amount.
///
/// Missing or unparseable amounts are zero.
pub fn split_trailing_amount(text: &str) -> (&str, Decimal) {
    match TRAILING_AMOUNT.captures(text) {
        Some(caps) => {
            let whole = caps.get(0).map_or(text.len(), |m| m.start());
            let amount = Decimal::from_str(&caps[1].replace(',', "")).unwrap_or(Decimal::ZERO);
            (text[..whole].trim_end(), amount)
        }
        None => (text, Decimal::ZERO),
    }
}

/// Remove an `Ag. ...` invoice-reference suffix.
pub fn strip_invoice_reference(line: &str) -> String {
    INVOICE_REFERENCE.replace(line, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_transaction_start() {
        assert_eq!(
            classify_line("Apr 1 UPMANYU TRADERS BIRHANA ROAD 11145.00"),
            LineKind::TransactionStart
        );
        assert_eq!(classify_line("Dec 26 SUSPENSE A/C 0.00"), LineKind::TransactionStart);
    }

    #[test]
    fn test_classify_bank_and_narration() {
        assert_eq!(classify_line("ICICI 192105002017 11145.00"), LineKind::BankAccount);
        assert_eq!(
            classify_line("UPI/512345678901/UPI/9450852076@YBL/HDFCBANK LTD/"),
            LineKind::Narration
        );
        assert_eq!(classify_line("BY CASH -733300 TIRWA (UP) 5000.00"), LineKind::Narration);
        assert_eq!(classify_line("Chq.704339 Dt. 26-12-2025"), LineKind::Narration);
    }

    #[test]
    fn test_classify_party_continuation() {
        assert_eq!(
            classify_line("GUPTA MEDICAL STORE KANPUR 2500.00"),
            LineKind::PartyContinuation
        );
        // One word, or a leading digit, is narration
        assert_eq!(classify_line("GUPTA 2500.00"), LineKind::Narration);
        assert_eq!(classify_line("12 GUPTA MEDICAL 2500.00"), LineKind::Narration);
        // No amount
        assert_eq!(classify_line("GUPTA MEDICAL STORE"), LineKind::Narration);
    }

    #[test]
    fn test_classify_reference_suffixed_narration() {
        assert_eq!(
            classify_line("NEFT_IN:null//SBINN52025042334823235/VIJAY MEDICAL STORE Ag. DDG000516"),
            LineKind::Narration
        );
        assert_eq!(
            classify_line("From:XXXX1234:RAM KUMAR SINGH Ag. DDG000517"),
            LineKind::Narration
        );
        assert_eq!(
            classify_line("PAYMENT RECEIVED THANKS Ag. DDG000518"),
            LineKind::Narration
        );
    }

    #[test]
    fn test_classify_noise() {
        assert_eq!(classify_line(""), LineKind::Noise);
        assert_eq!(classify_line("SUB TOTAL 5000.00"), LineKind::Noise);
        assert_eq!(classify_line("-----------"), LineKind::Noise);
        assert_eq!(classify_line("TOTAL 5000.00 5000.00"), LineKind::Noise);
    }

    #[test]
    fn test_split_trailing_amount() {
        assert_eq!(
            split_trailing_amount("BABA MEDICAL SHAMBHUA 1,11,744.00"),
            ("BABA MEDICAL SHAMBHUA", Decimal::new(111744, 0))
        );
        assert_eq!(
            split_trailing_amount("BABA MEDICAL"),
            ("BABA MEDICAL", Decimal::ZERO)
        );
    }

    #[test]
    fn test_strip_invoice_reference() {
        assert_eq!(
            strip_invoice_reference("BY CASH -733300 TIRWA (UP) Ag. DDG000201"),
            "BY CASH -733300 TIRWA (UP)"
        );
        assert_eq!(strip_invoice_reference("Ag. *DDG028429,*DDG028437"), "");
    }
}
