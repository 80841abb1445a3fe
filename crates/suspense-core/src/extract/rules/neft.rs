//! NEFT/INFT counterparty names.

use regex::Regex;

use crate::models::{Identifier, IdentifierType};
use crate::patterns::{BIL_INFT, INFT_SINGLE_NAME, INFT_TWO_NAMES, NEFT_CLASSIC, NEFT_IN};

use super::{is_valid_name, FieldExtractor};

/// Name layouts in priority order:
/// `NEFT-<ref>-<name>-`, `INF/INFT/<ref>/<a> /<b>`, `INF/INFT/<ref>/<name>`,
/// `BIL/INFT/<ref>/ <name>` and `NEFT_IN:..//<ref>/<name>`.
fn layouts() -> [&'static Regex; 5] {
    [&*NEFT_CLASSIC, &*INFT_TWO_NAMES, &*INFT_SINGLE_NAME, &*BIL_INFT, &*NEFT_IN]
}

/// The first valid name any layout yields.
pub fn extract_neft_name(narration: &str) -> Option<String> {
    let upper = narration.to_uppercase();
    layouts()
        .into_iter()
        .filter_map(|pattern| pattern.captures(&upper))
        .map(|caps| caps[1].trim().to_string())
        .find(|name| is_valid_name(name))
}

/// Emits at most one `neft_name` per narration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeftNameExtractor;

impl NeftNameExtractor {
    /// Create a new NEFT name extractor.
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for NeftNameExtractor {
    type Output = Identifier;

    fn extract_all(&self, text: &str) -> Vec<Identifier> {
        extract_neft_name(text)
            .map(|name| Identifier::new(IdentifierType::NeftName, name))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_neft_names() {
        let cases = [
            (
                "NEFT-UCBAN52025040104667985-SHRI SHYAM AGENCY-/FAST/// NEFT-25170210002308-U",
                "SHRI SHYAM AGENCY",
            ),
            (
                "NEFT-BARBN52025040226217799-VAIBHAV LAXMI MEDICALSTORE--37100200000337-BARB0",
                "VAIBHAV LAXMI MEDICALSTORE",
            ),
            (
                "NEFT-CNRBN52025040237124747-VINAY MEDICAL STORE-NA NA-86551400000375-CNRB000",
                "VINAY MEDICAL STORE",
            ),
            (
                "NEFT-YESBN12025040203209954-ONE 97 COMMUNICATIONSLIMITED SETTL--001425000000",
                "ONE 97 COMMUNICATIONSLIMITED SETTL",
            ),
            (
                "NEFT-SBINN52025040812556593-AMAR MEDICINE AND COSMETICS-/ATTN//INB//PAYMENT",
                "AMAR MEDICINE AND COSMETICS",
            ),
        ];
        for (narration, expected) in cases {
            assert_eq!(extract_neft_name(narration).as_deref(), Some(expected), "{narration}");
        }
    }

    #[test]
    fn test_inft_names() {
        assert_eq!(
            extract_neft_name("INF/INFT/039939724801/DURGAKNP /S S PHARMA").as_deref(),
            Some("S S PHARMA")
        );
        assert_eq!(
            extract_neft_name("INF/INFT/041141036691/GAYATRI PHARMA").as_deref(),
            Some("GAYATRI PHARMA")
        );
        assert_eq!(
            extract_neft_name("BIL/INFT/EDC0857581/ SANJIT KUMAR").as_deref(),
            Some("SANJIT KUMAR")
        );
    }

    #[test]
    fn test_neft_in_stops_at_agent_marker() {
        assert_eq!(
            extract_neft_name("NEFT_IN:null//SBINN52025042334823235/VIJAY MEDICAL STORE Ag. DDG000516")
                .as_deref(),
            Some("VIJAY MEDICAL STORE")
        );
    }

    #[test]
    fn test_non_neft_narrations() {
        assert_eq!(extract_neft_name("UPI/SANDHYA ME/9450852076@YBL/PAYMENT"), None);
        assert_eq!(extract_neft_name("MMT/IMPS/518211116991/OK/ANURAG SHA/HDFC BANK"), None);
    }
}
