//! Bank account number extraction.

use crate::models::{Identifier, IdentifierType};
use crate::patterns::{ACCOUNT_IN_REFERENCE, ACCOUNT_LABELED};

use super::{neighbours, FieldExtractor};

/// Account numbers from `-<digits>-` references and `A/C No.` labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountExtractor;

impl AccountExtractor {
    /// Create a new account number extractor.
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for AccountExtractor {
    type Output = Identifier;

    fn extract_all(&self, text: &str) -> Vec<Identifier> {
        let upper = text.to_uppercase();

        let referenced = ACCOUNT_IN_REFERENCE
            .find_iter(&upper)
            .filter(|m| {
                let (before, after) = neighbours(&upper, m);
                before == Some(b'-') && matches!(after, None | Some(b'-'))
            })
            .map(|m| m.as_str().to_string());
        let labeled = ACCOUNT_LABELED
            .captures_iter(&upper)
            .map(|caps| caps[1].to_string());

        referenced
            .chain(labeled)
            .map(|value| Identifier::new(IdentifierType::AccountNumber, value))
            .collect()
    }
}
