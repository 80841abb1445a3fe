//! IMPS counterparty names and bank.

use regex::Regex;

use crate::models::{Identifier, IdentifierType};
use crate::patterns::{
    IMPS_OK, IMPS_P2A, IMPS_REQPAY, IMPS_SECONDARY_REF, IMPS_SIMPLE, IMPS_TWO_NAMES,
};

use super::banks::normalize_bank;
use super::{is_valid_name, FieldExtractor};

/// Names and bank recovered from one `MMT/IMPS/...` narration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImpsDetails {
    pub names: Vec<String>,
    /// Normalized bank name; empty when the bank field was blank.
    pub bank: String,
}

/// An IMPS narration layout: pattern, name groups, bank group.
struct ImpsLayout {
    pattern: &'static Regex,
    name_groups: &'static [usize],
    bank_group: usize,
}

/// Layouts in priority order; the first pattern that matches decides.
fn layouts() -> [ImpsLayout; 6] {
    [
        // MMT/IMPS/<ref>/OK/<name>/<bank>
        ImpsLayout { pattern: &*IMPS_OK, name_groups: &[1], bank_group: 2 },
        // MMT/IMPS/<ref>/<name1>/<name2>/<bank>
        ImpsLayout { pattern: &*IMPS_TWO_NAMES, name_groups: &[1, 2], bank_group: 3 },
        // MMT/IMPS/<ref>/<secondary ref> /<name>/<bank>
        ImpsLayout { pattern: &*IMPS_SECONDARY_REF, name_groups: &[1], bank_group: 2 },
        // MMT/IMPS/<ref>/IMPS P2A <sender> /<receiver>/<bank>
        ImpsLayout { pattern: &*IMPS_P2A, name_groups: &[1, 2], bank_group: 3 },
        // MMT/IMPS/<ref>/REQPAY/<name> /<bank>
        ImpsLayout { pattern: &*IMPS_REQPAY, name_groups: &[1], bank_group: 2 },
        // MMT/IMPS/<ref>/<name>/<bank>
        ImpsLayout { pattern: &*IMPS_SIMPLE, name_groups: &[1], bank_group: 2 },
    ]
}

/// Parse an IMPS narration. `None` when no layout matches.
pub fn extract_imps(narration: &str) -> Option<ImpsDetails> {
    let upper = narration.to_uppercase();

    layouts().into_iter().find_map(|layout| {
        let caps = layout.pattern.captures(&upper)?;
        let names = layout
            .name_groups
            .iter()
            .filter_map(|&group| caps.get(group))
            .map(|m| m.as_str().trim())
            .filter(|name| is_valid_name(name))
            .map(str::to_string)
            .collect();
        let bank = caps
            .get(layout.bank_group)
            .map(|m| normalize_bank(m.as_str()))
            .unwrap_or_default();
        Some(ImpsDetails { names, bank })
    })
}

/// Emits `imps_name` identifiers followed by the `bank_name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImpsExtractor;

impl ImpsExtractor {
    /// Create a new IMPS extractor.
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for ImpsExtractor {
    type Output = Identifier;

    fn extract_all(&self, text: &str) -> Vec<Identifier> {
        let Some(details) = extract_imps(text) else {
            return Vec::new();
        };

        let mut identifiers: Vec<Identifier> = details
            .names
            .into_iter()
            .map(|name| Identifier::new(IdentifierType::ImpsName, name))
            .collect();
        if !details.bank.is_empty() {
            identifiers.push(Identifier::new(IdentifierType::BankName, details.bank));
        }
        identifiers
    }
}
