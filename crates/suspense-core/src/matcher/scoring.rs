//! Confidence scoring.

use crate::models::MatchedIdentifier;

/// Upper bound of every confidence score.
pub const MAX_CONFIDENCE: f64 = 100.0;

/// Combine evidence into a confidence score.
///
/// Each distinct identifier type counts once, in evidence order. The first
/// type contributes its full weight; each later type closes
/// `weight * corroboration` of the remaining gap to 100.
pub fn confidence(evidence: &[MatchedIdentifier], corroboration: f64) -> f64 {
    let mut seen: Vec<&str> = Vec::new();
    let mut score: f64 = 0.0;

    for item in evidence {
        if seen.contains(&item.kind.as_str()) {
            continue;
        }
        seen.push(&item.kind);

        let weight = item.weight() * 100.0;
        if seen.len() == 1 {
            score = weight;
        } else {
            score += (MAX_CONFIDENCE - score) * (weight / 100.0) * corroboration;
        }
    }

    score.min(MAX_CONFIDENCE)
}

/// Scale a score by `1 + log10(transaction_count) * factor`, capped at 100.
pub fn history_boost(score: f64, transaction_count: u64, factor: f64) -> f64 {
    if transaction_count == 0 {
        return score;
    }
    let boost = 1.0 + (transaction_count as f64).log10() * factor;
    (score * boost).min(MAX_CONFIDENCE)
}
