//! Payment identifier extraction from bank narrations.

pub mod rules;

use std::collections::HashSet;

use tracing::debug;

use crate::models::{Identifier, IdentifierType};

use rules::{
    AccountExtractor, CashDepositExtractor, FieldExtractor, IfscExtractor, ImpsExtractor,
    MaskedSourceExtractor, NeftNameExtractor, PhoneExtractor, UpiExtractor,
};

type Rule = Box<dyn FieldExtractor<Output = Identifier> + Send + Sync>;

/// Runs every identifier rule over a narration.
///
/// Extraction is total and deterministic: identifiers come back in rule order
/// then discovery order, with repeated `(type, value)` pairs dropped.
pub struct IdentifierExtractor {
    rules: Vec<Rule>,
}

impl IdentifierExtractor {
    /// Create an extractor with the full rule battery.
    pub fn new() -> Self {
        let rules: Vec<Rule> = vec![
            Box::new(UpiExtractor::new()),
            Box::new(PhoneExtractor::new()),
            Box::new(AccountExtractor::new()),
            Box::new(IfscExtractor::new()),
            Box::new(ImpsExtractor::new()),
            Box::new(NeftNameExtractor::new()),
            Box::new(CashDepositExtractor::new()),
            Box::new(MaskedSourceExtractor::new()),
        ];
        Self { rules }
    }

    /// Extract all identifiers from a narration.
    pub fn extract(&self, narration: &str) -> Vec<Identifier> {
        let mut seen = HashSet::new();
        let identifiers: Vec<Identifier> = self
            .rules
            .iter()
            .flat_map(|rule| rule.extract_all(narration))
            .filter(|id| seen.insert((id.kind, id.value.clone())))
            .collect();

        debug!("Extracted {} identifiers", identifiers.len());
        identifiers
    }

    /// Identifier values only.
    pub fn extract_values(&self, narration: &str) -> Vec<String> {
        self.extract(narration).into_iter().map(|id| id.value).collect()
    }

    /// Values of one identifier type.
    pub fn extract_by_type(&self, narration: &str, kind: IdentifierType) -> Vec<String> {
        self.extract(narration)
            .into_iter()
            .filter(|id| id.kind == kind)
            .map(|id| id.value)
            .collect()
    }
}

impl Default for IdentifierExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract identifiers with the default rule battery.
pub fn extract(narration: &str) -> Vec<Identifier> {
    IdentifierExtractor::new().extract(narration)
}
