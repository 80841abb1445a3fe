//! UPI handle extraction.

use regex::Regex;

use crate::models::{Identifier, IdentifierType};
use crate::patterns::{
    UPI_AFTER_NAME, UPI_AFTER_UPI_TAG, UPI_BEFORE_PAYMENT_FROM, UPI_BEFORE_REFERENCE, UPI_HANDLE,
    UPI_LEADING,
};

use super::FieldExtractor;

/// UPI handle extractor.
///
/// The generic `local@provider` form is matched against the original text.
/// The slash-delimited layouts are matched against the upper-cased text and
/// every layout is tried, since one narration can carry several handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpiExtractor;

impl UpiExtractor {
    /// Create a new UPI handle extractor.
    pub fn new() -> Self {
        Self
    }

    fn layouts() -> [&'static Regex; 5] {
        [
            &*UPI_AFTER_UPI_TAG,
            &*UPI_BEFORE_PAYMENT_FROM,
            &*UPI_AFTER_NAME,
            &*UPI_BEFORE_REFERENCE,
            &*UPI_LEADING,
        ]
    }
}

impl FieldExtractor for UpiExtractor {
    type Output = Identifier;

    fn extract_all(&self, text: &str) -> Vec<Identifier> {
        let upper = text.to_uppercase();

        let generic = UPI_HANDLE
            .captures_iter(text)
            .map(|caps| caps[1].to_uppercase());
        let layouts = Self::layouts().into_iter().flat_map(|pattern| {
            pattern
                .captures_iter(&upper)
                .map(|caps| caps[1].to_string())
                .collect::<Vec<_>>()
        });

        generic
            .chain(layouts)
            .map(|value| Identifier::new(IdentifierType::UpiVpa, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles(narration: &str) -> Vec<String> {
        let mut seen = Vec::new();
        for id in UpiExtractor::new().extract_all(narration) {
            if !seen.contains(&id.value) {
                seen.push(id.value);
            }
        }
        seen
    }

    #[test]
    fn test_generic_handle_is_upper_cased() {
        assert_eq!(
            handles("UPI/SANDHYA ME/9450852076@YBL/PAYMENT FR/STATE BANK/450854353978"),
            vec!["9450852076@YBL"]
        );
        assert_eq!(
            handles("Transfer from test@paytm to user@upi"),
            vec!["TEST@PAYTM", "USER@UPI"]
        );
    }

    #[test]
    fn test_layout_handles() {
        assert_eq!(
            handles("UPI/564031341768/UPI/ANUJ19SENGARR-3/KOTAK MAHINDRA /AXI0E9F3406C3D74904A45A"),
            vec!["ANUJ19SENGARR-3"]
        );
        assert_eq!(
            handles("UPI/MR MAHESH/SHRIVASMAHESH2/PAYMENT FR/BANK OF BA/464278460653/YBLE6E8037FC"),
            vec!["SHRIVASMAHESH2"]
        );
        assert_eq!(
            handles("UPI/ASHISHKUMARPAND/SHRI RADHEY KRI/BANK OF BARODA/102557916140/HDFA655BF2F2"),
            vec!["ASHISHKUMARPAND"]
        );
        assert_eq!(
            handles("UPI/112177057693/TULSHI MEDICAL/RKROHITKUMAR459/UTTAR PRADESH G/HDF0C8DB9785"),
            vec!["RKROHITKUMAR459"]
        );
    }

    #[test]
    fn test_no_handle() {
        assert!(handles("NEFT transfer 12345").is_empty());
    }
}
