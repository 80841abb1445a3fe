//! IFSC code extraction.

use crate::models::{Identifier, IdentifierType};
use crate::patterns::IFSC;

use super::FieldExtractor;

#[derive(Debug, Clone, Copy, Default)]
pub struct IfscExtractor;

impl IfscExtractor {
    /// Create a new IFSC extractor.
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for IfscExtractor {
    type Output = Identifier;

    fn extract_all(&self, text: &str) -> Vec<Identifier> {
        IFSC.find_iter(&text.to_uppercase())
            .map(|m| Identifier::new(IdentifierType::Ifsc, m.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(text: &str) -> Vec<String> {
        IfscExtractor::new()
            .extract_all(text)
            .into_iter()
            .map(|id| id.value)
            .collect()
    }

    #[test]
    fn test_ifsc_codes() {
        assert_eq!(codes("RTGS-HDFC0001234-COMPANY NAME-123456789012"), vec!["HDFC0001234"]);
        assert_eq!(
            codes("Transfer from sbin0001234 to ICIC0002345"),
            vec!["SBIN0001234", "ICIC0002345"]
        );
    }

    #[test]
    fn test_requires_zero_in_fifth_place() {
        assert!(codes("ABCD1234567 is not valid").is_empty());
        assert!(codes("UPI/user@ybl/PAYMENT").is_empty());
    }
}
