//! Masked source account and sender from `From:XXXX<digits>:<NAME>` fields.

use crate::models::{Identifier, IdentifierType};
use crate::patterns::MASKED_SOURCE;

use super::{is_valid_name, FieldExtractor};

#[derive(Debug, Clone, Copy, Default)]
pub struct MaskedSourceExtractor;

impl MaskedSourceExtractor {
    /// Create a new masked source extractor.
    pub fn new() -> Self {
        Self
    }
}

/// The greedy name group can swallow the `AG` of a following `Ag.` reference.
fn sender_name(raw: &str) -> &str {
    let name = raw.trim();
    name.strip_suffix(" AG").unwrap_or(name).trim()
}

impl FieldExtractor for MaskedSourceExtractor {
    type Output = Identifier;

    fn extract_all(&self, text: &str) -> Vec<Identifier> {
        let upper = text.to_uppercase();
        let Some(caps) = MASKED_SOURCE.captures(&upper) else {
            return Vec::new();
        };

        let mut identifiers = vec![Identifier::new(IdentifierType::FromAccount, &caps[1])];
        let name = sender_name(&caps[2]);
        if is_valid_name(name) {
            identifiers.push(Identifier::new(IdentifierType::FromName, name));
        }
        identifiers
    }
}
