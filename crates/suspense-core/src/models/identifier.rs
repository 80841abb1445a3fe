//! Payment identifiers recovered from narrations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of identifier extracted from a narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierType {
    /// UPI handle, with or without the `@provider` part.
    UpiVpa,
    /// Ten-digit mobile number.
    Phone,
    AccountNumber,
    Ifsc,
    /// Sender or receiver name from an IMPS narration.
    ImpsName,
    /// Sender or receiver name from a NEFT/INFT narration.
    NeftName,
    /// Normalized bank name from an IMPS narration.
    BankName,
    /// Branch code of a cash deposit.
    CashBankCode,
    /// Branch location of a cash deposit, e.g. `TIRWA (UP)`.
    CashLocation,
    /// Collection agent code, e.g. `DDG000201`.
    CashAgentCode,
    /// Masked source account from a `From:` field, e.g. `XXXX8723`.
    FromAccount,
    /// Sender name from a `From:` field.
    FromName,
}

/// Weight used for identifier types without a specific weight.
pub const UNKNOWN_TYPE_WEIGHT: f64 = 0.50;

impl IdentifierType {
    pub const ALL: [IdentifierType; 12] = [
        Self::UpiVpa,
        Self::Phone,
        Self::AccountNumber,
        Self::Ifsc,
        Self::ImpsName,
        Self::NeftName,
        Self::BankName,
        Self::CashBankCode,
        Self::CashLocation,
        Self::CashAgentCode,
        Self::FromAccount,
        Self::FromName,
    ];

    /// Storage code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpiVpa => "upi_vpa",
            Self::Phone => "phone",
            Self::AccountNumber => "account_number",
            Self::Ifsc => "ifsc",
            Self::ImpsName => "imps_name",
            Self::NeftName => "neft_name",
            Self::BankName => "bank_name",
            Self::CashBankCode => "cash_bank_code",
            Self::CashLocation => "cash_location",
            Self::CashAgentCode => "cash_agent_code",
            Self::FromAccount => "from_account",
            Self::FromName => "from_name",
        }
    }

    /// How strongly a match on this type points at a single party (0.0 - 1.0).
    pub fn match_weight(&self) -> f64 {
        match self {
            Self::UpiVpa => 0.95,
            Self::Phone => 0.85,
            Self::AccountNumber => 0.80,
            // Names get truncated and collide.
            Self::ImpsName | Self::NeftName => 0.50,
            // Thousands of payers share a bank.
            Self::BankName => 0.20,
            _ => UNKNOWN_TYPE_WEIGHT,
        }
    }

    /// Whether values of this type are person/entity names.
    pub fn is_name(&self) -> bool {
        matches!(self, Self::ImpsName | Self::NeftName)
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown identifier type: {s}"))
    }
}

/// A typed identifier value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(rename = "type")]
    pub kind: IdentifierType,
    pub value: String,
}

impl Identifier {
    pub fn new(kind: IdentifierType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_type_codes_parse_back() {
        for kind in IdentifierType::ALL {
            assert_eq!(kind.as_str().parse::<IdentifierType>(), Ok(kind));
        }
        assert!("narration".parse::<IdentifierType>().is_err());
    }

    #[test]
    fn test_match_weights() {
        assert_eq!(IdentifierType::UpiVpa.match_weight(), 0.95);
        assert_eq!(IdentifierType::BankName.match_weight(), 0.20);
        assert_eq!(IdentifierType::Ifsc.match_weight(), UNKNOWN_TYPE_WEIGHT);
    }

    #[test]
    fn test_identifier_serializes_with_type_key() {
        let id = Identifier::new(IdentifierType::CashAgentCode, "DDG000201");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#"{"type":"cash_agent_code","value":"DDG000201"}"#);
    }
}
