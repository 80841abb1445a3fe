//! Rule-based identifier extractors for bank narrations.

pub mod account;
pub mod banks;
pub mod cash;
pub mod ifsc;
pub mod imps;
pub mod masked;
pub mod neft;
pub mod phone;
pub mod upi;

pub use account::AccountExtractor;
pub use banks::normalize_bank;
pub use cash::CashDepositExtractor;
pub use ifsc::IfscExtractor;
pub use imps::{extract_imps, ImpsDetails, ImpsExtractor};
pub use masked::MaskedSourceExtractor;
pub use neft::{extract_neft_name, NeftNameExtractor};
pub use phone::PhoneExtractor;
pub use upi::UpiExtractor;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence from a narration.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Extract all occurrences, in discovery order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Tokens that sit in name positions but are statuses, not names.
const STATUS_TOKENS: &[&str] = &["OK", "NA", "NULL", "FAIL", "ERROR", "PENDING", "SUCCESS"];

/// Whether an extracted name is a plausible person or business name.
///
/// Rejects status tokens, payment descriptions such as `MASTODINPAYMENT`,
/// and strings without a letter.
pub fn is_valid_name(name: &str) -> bool {
    let name = name.trim();
    if name.len() < 2 || STATUS_TOKENS.contains(&name) {
        return false;
    }
    if name.to_uppercase().ends_with("PAYMENT") {
        return false;
    }
    name.chars().any(|c| c.is_ascii_alphabetic())
}

/// Bytes immediately before and after a match, if any.
pub(crate) fn neighbours(text: &str, m: &regex::Match<'_>) -> (Option<u8>, Option<u8>) {
    let bytes = text.as_bytes();
    let before = m.start().checked_sub(1).map(|i| bytes[i]);
    (before, bytes.get(m.end()).copied())
}
