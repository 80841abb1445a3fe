//! Parsed ledger records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::identifier::Identifier;

/// Payment rail a narration was posted through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMode {
    Upi,
    Imps,
    Neft,
    Rtgs,
    Clg,
    Inf,
    Trf,
    Cheque,
    Pos,
    Cash,
    Other,
}

impl PaymentMode {
    /// Canonical upper-case code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::Imps => "IMPS",
            Self::Neft => "NEFT",
            Self::Rtgs => "RTGS",
            Self::Clg => "CLG",
            Self::Inf => "INF",
            Self::Trf => "TRF",
            Self::Cheque => "CHEQUE",
            Self::Pos => "POS",
            Self::Cash => "CASH",
            Self::Other => "OTHER",
        }
    }
}

impl Default for PaymentMode {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UPI" => Ok(Self::Upi),
            "IMPS" => Ok(Self::Imps),
            "NEFT" => Ok(Self::Neft),
            "RTGS" => Ok(Self::Rtgs),
            "CLG" => Ok(Self::Clg),
            "INF" => Ok(Self::Inf),
            "TRF" => Ok(Self::Trf),
            "CHEQUE" => Ok(Self::Cheque),
            "POS" => Ok(Self::Pos),
            "CASH" => Ok(Self::Cash),
            "OTHER" => Ok(Self::Other),
            other => Err(format!("unknown payment mode: {other}")),
        }
    }
}

/// One recognized ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    /// Entry date; the year comes from the caller or the ledger header.
    pub date: NaiveDate,

    /// Party name with any trailing location removed.
    pub party_name: String,

    /// Trailing location split off the party field (empty when none).
    pub location: String,

    /// Credited amount.
    pub amount: Decimal,

    /// Bank-account and narration lines joined with single spaces.
    pub narration: String,

    /// Rail derived from the narration.
    pub payment_mode: PaymentMode,

    /// Depositing branch code, for `BY CASH -<code> <location>` narrations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_bank_code: Option<String>,

    /// Depositing branch location, for `BY CASH -<code> <location>` narrations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_bank_location: Option<String>,
}

impl ParsedTransaction {
    /// Create a transaction with no narration yet.
    pub fn new(date: NaiveDate, party_name: impl Into<String>, location: impl Into<String>, amount: Decimal) -> Self {
        Self {
            date,
            party_name: party_name.into(),
            location: location.into(),
            amount,
            narration: String::new(),
            payment_mode: PaymentMode::Other,
            cash_bank_code: None,
            cash_bank_location: None,
        }
    }
}

/// A parsed transaction bundled with the identifiers found in its narration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRecord {
    pub transaction: ParsedTransaction,
    pub identifiers: Vec<Identifier>,
}

/// One line of a sale-bill register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleBill {
    pub bill_number: String,
    pub date: NaiveDate,
    pub party_name: String,
    pub amount: Decimal,
    pub is_cash_sale: bool,
}
