//! Cash-deposit fields.

use crate::models::{Identifier, IdentifierType};
use crate::patterns::{CASH_AGENT_CODE, CASH_BANK_CODE, CASH_LOCATION};

use super::FieldExtractor;

/// Branch code, branch location and agent code of a cash deposit.
///
/// Each field is matched independently, so an agent code is found on any
/// narration carrying an `Ag.` reference, not only `BY CASH` ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashDepositExtractor;

impl CashDepositExtractor {
    /// Create a new cash deposit extractor.
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for CashDepositExtractor {
    type Output = Identifier;

    fn extract_all(&self, text: &str) -> Vec<Identifier> {
        let upper = text.to_uppercase();
        let mut identifiers = Vec::new();

        if let Some(caps) = CASH_BANK_CODE.captures(&upper) {
            identifiers.push(Identifier::new(IdentifierType::CashBankCode, &caps[1]));
        }

        if let Some(caps) = CASH_LOCATION.captures(&upper) {
            let location = caps[1].trim();
            if !location.is_empty() {
                identifiers.push(Identifier::new(IdentifierType::CashLocation, location));
            }
        }

        if let Some(caps) = CASH_AGENT_CODE.captures(&upper) {
            identifiers.push(Identifier::new(IdentifierType::CashAgentCode, &caps[1]));
        }

        identifiers
    }
}
