//! Party records exchanged with the party store and produced by the matcher.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::identifier::{Identifier, IdentifierType, UNKNOWN_TYPE_WEIGHT};
use super::transaction::PaymentMode;

/// Evidence type recorded for narration-substring matches.
pub const NARRATION_MATCH_TYPE: &str = "narration";

/// A counterparty row as stored by the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An identifier owned by a party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredIdentifier {
    pub party_id: i64,
    #[serde(rename = "type")]
    pub kind: IdentifierType,
    pub value: String,
}

/// A historical transaction attributed to a party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTransaction {
    pub id: i64,
    pub party_id: i64,
    pub amount: Decimal,
    pub transaction_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<PaymentMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
}

/// A party returned by an identifier lookup, with the identifier that hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyMatchRow {
    pub party: Party,
    /// Identifier type code as stored (see [`IdentifierType::as_str`]).
    pub matched_type: String,
    pub matched_value: String,
}

/// Aggregate history of one party row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartyStats {
    pub transaction_count: u64,
    pub total_amount: Decimal,
}

/// One piece of evidence behind a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchedIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl MatchedIdentifier {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Weight of this evidence's type; unknown types get the moderate default.
    pub fn weight(&self) -> f64 {
        self.kind
            .parse::<IdentifierType>()
            .map(|t| t.match_weight())
            .unwrap_or(UNKNOWN_TYPE_WEIGHT)
    }
}

impl From<&Identifier> for MatchedIdentifier {
    fn from(id: &Identifier) -> Self {
        Self::new(id.kind.as_str(), id.value.clone())
    }
}

/// A ranked party candidate for a narration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// First row seen under this party name.
    pub party: Party,
    /// Every row id merged under the same name.
    pub party_ids: Vec<i64>,
    /// Confidence in [0, 100].
    pub confidence: f64,
    pub matched_on: Vec<MatchedIdentifier>,
    pub transaction_count: u64,
    pub total_amount: Decimal,
    pub recent_transactions: Vec<StoredTransaction>,
}

impl MatchCandidate {
    pub(crate) fn new(party: Party, confidence: f64) -> Self {
        let id = party.id;
        Self {
            party,
            party_ids: vec![id],
            confidence,
            matched_on: Vec::new(),
            transaction_count: 0,
            total_amount: Decimal::ZERO,
            recent_transactions: Vec::new(),
        }
    }

    pub(crate) fn add_party_id(&mut self, id: i64) {
        if !self.party_ids.contains(&id) {
            self.party_ids.push(id);
        }
    }

    pub(crate) fn add_evidence(&mut self, evidence: MatchedIdentifier) {
        if !self.matched_on.contains(&evidence) {
            self.matched_on.push(evidence);
        }
    }
}

/// Everything the search collaborator displays for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub narration: String,
    pub identifiers: Vec<Identifier>,
    pub candidates: Vec<MatchCandidate>,
}
