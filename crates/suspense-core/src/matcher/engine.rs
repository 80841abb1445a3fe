//! Party matching engine.

use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::extract::IdentifierExtractor;
use crate::models::{
    Identifier, MatchCandidate, MatchedIdentifier, MatcherConfig, Party, SearchOutcome,
    NARRATION_MATCH_TYPE,
};

use super::scoring::{confidence, history_boost};
use super::store::PartyStore;

/// Length of a bare IMPS reference number.
const IMPS_REFERENCE_LEN: usize = 12;

/// Maps narrations to ranked party candidates.
pub struct Matcher<S> {
    store: S,
    extractor: IdentifierExtractor,
    config: MatcherConfig,
}

/// Candidates keyed by party name, kept in first-seen order.
#[derive(Default)]
struct CandidateSet {
    candidates: Vec<MatchCandidate>,
    by_name: HashMap<String, usize>,
}

impl CandidateSet {
    /// The candidate for `party`'s name, created with `confidence` on first sight.
    fn entry(&mut self, party: Party, confidence: f64) -> &mut MatchCandidate {
        let index = match self.by_name.get(&party.name) {
            Some(&index) => {
                self.candidates[index].add_party_id(party.id);
                index
            }
            None => {
                let index = self.candidates.len();
                self.by_name.insert(party.name.clone(), index);
                self.candidates.push(MatchCandidate::new(party, confidence));
                index
            }
        };
        &mut self.candidates[index]
    }

    fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn into_vec(self) -> Vec<MatchCandidate> {
        self.candidates
    }
}

impl<S: PartyStore> Matcher<S> {
    /// Create a matcher with default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, MatcherConfig::default())
    }

    pub fn with_config(store: S, config: MatcherConfig) -> Self {
        Self {
            store,
            extractor: IdentifierExtractor::new(),
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Rank candidate parties for a narration, best first.
    ///
    /// Fails only when the identifier lookup itself fails. An empty result
    /// means no match.
    pub fn match_narration(&self, narration: &str) -> Result<Vec<MatchCandidate>> {
        let identifiers = self.extractor.extract(narration);
        self.rank(narration, &identifiers)
    }

    /// The top-ranked candidate, if any.
    pub fn best_match(&self, narration: &str) -> Result<Option<MatchCandidate>> {
        Ok(self.match_narration(narration)?.into_iter().next())
    }

    /// Extracted identifiers and ranked candidates for display.
    pub fn search(&self, narration: &str) -> Result<SearchOutcome> {
        let identifiers = self.extractor.extract(narration);
        let candidates = self.rank(narration, &identifiers)?;
        Ok(SearchOutcome {
            narration: narration.to_string(),
            identifiers,
            candidates,
        })
    }

    fn rank(&self, narration: &str, identifiers: &[Identifier]) -> Result<Vec<MatchCandidate>> {
        let mut set = self.by_identifiers(identifiers)?;
        if set.is_empty() {
            set = self.by_narration(narration, identifiers);
        }

        let mut candidates = set.into_vec();
        for candidate in &mut candidates {
            self.enrich(candidate);
            debug!(
                "Candidate {} scored {:.2} on {} identifiers",
                candidate.party.name,
                candidate.confidence,
                candidate.matched_on.len()
            );
        }

        // Stable, so ties keep first-seen order.
        candidates.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });

        info!(
            "Matched narration to {} candidates ({} identifiers)",
            candidates.len(),
            identifiers.len()
        );
        Ok(candidates)
    }

    fn by_identifiers(&self, identifiers: &[Identifier]) -> Result<CandidateSet> {
        let mut set = CandidateSet::default();
        if identifiers.is_empty() {
            return Ok(set);
        }

        let mut values: Vec<String> = Vec::new();
        for id in identifiers {
            if !values.contains(&id.value) {
                values.push(id.value.clone());
            }
        }

        for row in self.store.find_parties_by_identifier_values(&values)? {
            set.entry(row.party, 0.0)
                .add_evidence(MatchedIdentifier::new(row.matched_type, row.matched_value));
        }

        for candidate in &mut set.candidates {
            candidate.confidence =
                confidence(&candidate.matched_on, self.config.corroboration_factor);
        }
        Ok(set)
    }

    /// Substring search over stored narrations, from names or a bare IMPS reference.
    fn by_narration(&self, narration: &str, identifiers: &[Identifier]) -> CandidateSet {
        let mut set = CandidateSet::default();

        for pattern in narration_patterns(narration, identifiers) {
            let parties = match self.store.find_parties_by_narration_substring(&pattern) {
                Ok(parties) => parties,
                Err(e) => {
                    warn!("Narration lookup for {:?} failed: {}", pattern, e);
                    continue;
                }
            };

            for party in parties {
                let fresh = !set.by_name.contains_key(&party.name);
                let candidate = set.entry(party, self.config.narration_confidence);
                if fresh {
                    candidate.add_evidence(MatchedIdentifier::new(NARRATION_MATCH_TYPE, &pattern));
                }
            }
        }
        set
    }

    /// Fill history and apply the boost. Lookup failures leave the candidate unboosted.
    fn enrich(&self, candidate: &mut MatchCandidate) {
        let mut recent = Vec::new();

        for &party_id in &candidate.party_ids {
            match self.store.get_party_transaction_stats(party_id) {
                Ok(stats) => {
                    candidate.transaction_count += stats.transaction_count;
                    candidate.total_amount += stats.total_amount;
                }
                Err(e) => warn!("Stats lookup for party {} failed: {}", party_id, e),
            }

            match self
                .store
                .get_recent_transactions(party_id, self.config.recent_limit)
            {
                Ok(transactions) => recent.extend(transactions),
                Err(e) => warn!("History lookup for party {} failed: {}", party_id, e),
            }
        }

        recent.sort_by_key(|t| Reverse(t.transaction_date));
        recent.truncate(self.config.recent_limit);
        candidate.recent_transactions = recent;

        candidate.confidence = history_boost(
            candidate.confidence,
            candidate.transaction_count,
            self.config.history_boost_factor,
        );
    }
}

/// Search patterns for the narration fallback.
///
/// IMPS and NEFT names when there are any, otherwise the 12-digit reference
/// numbers of an `MMT/IMPS/` narration.
pub fn narration_patterns(narration: &str, identifiers: &[Identifier]) -> Vec<String> {
    let names: Vec<String> = identifiers
        .iter()
        .filter(|id| id.kind.is_name())
        .map(|id| id.value.clone())
        .collect();
    if !names.is_empty() {
        return names;
    }

    if !narration.to_uppercase().contains("MMT/IMPS/") {
        return Vec::new();
    }
    narration
        .split('/')
        .map(str::trim)
        .filter(|part| part.len() == IMPS_REFERENCE_LEN && part.bytes().all(|b| b.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}
