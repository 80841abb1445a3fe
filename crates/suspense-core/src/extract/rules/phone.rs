//! Mobile number extraction.

use crate::models::{Identifier, IdentifierType};
use crate::patterns::PHONE;

use super::{neighbours, FieldExtractor};

/// Ten-digit Indian mobile numbers (leading 6-9) not embedded in a longer digit run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneExtractor;

impl PhoneExtractor {
    /// Create a new mobile number extractor.
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = Identifier;

    fn extract_all(&self, text: &str) -> Vec<Identifier> {
        PHONE
            .find_iter(text)
            .filter(|m| {
                let (before, after) = neighbours(text, m);
                let digit = |b: Option<u8>| b.is_some_and(|b| b.is_ascii_digit());
                !digit(before) && !digit(after)
            })
            .map(|m| Identifier::new(IdentifierType::Phone, m.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phones(text: &str) -> Vec<String> {
        PhoneExtractor::new()
            .extract_all(text)
            .into_iter()
            .map(|id| id.value)
            .collect()
    }

    #[test]
    fn test_phone_inside_upi_handle() {
        assert_eq!(phones("UPI/SANDHYA ME/9450852076@YBL/PAYMENT"), vec!["9450852076"]);
    }

    #[test]
    fn test_phone_standalone() {
        assert_eq!(phones("IMPS/450912345678/9876543210/Payment"), vec!["9876543210"]);
        assert_eq!(phones("9876543210"), vec!["9876543210"]);
    }

    #[test]
    fn test_rejects_non_mobile_numbers() {
        assert!(phones("IMPS/5234567890/Payment").is_empty());
        assert!(phones("REF 98765432101").is_empty());
        assert!(phones("NEFT transfer from account").is_empty());
    }

    #[test]
    fn test_adjacent_phones_share_separator() {
        assert_eq!(
            phones("IMPS/9876543210/9876543211/X"),
            vec!["9876543210", "9876543211"]
        );
        assert_eq!(phones("9876543210 9450852076"), vec!["9876543210", "9450852076"]);
    }
}
