//! In-memory party store.

use std::cmp::Reverse;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::StoreError;
use crate::models::{
    Identifier, ImportRecord, Party, PartyMatchRow, PartyStats, PaymentMode, StoredIdentifier,
    StoredTransaction,
};

use super::store::PartyStore;

/// Parties, identifiers and transactions held in vectors.
///
/// Mirrors the import flow of the surrounding application: no uniqueness
/// constraints, identifiers reassigned on re-import.
#[derive(Debug, Clone, Default)]
pub struct MemoryPartyStore {
    parties: Vec<Party>,
    identifiers: Vec<StoredIdentifier>,
    transactions: Vec<StoredTransaction>,
}

impl MemoryPartyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn identifiers(&self) -> &[StoredIdentifier] {
        &self.identifiers
    }

    pub fn transactions(&self) -> &[StoredTransaction] {
        &self.transactions
    }

    pub fn party(&self, id: i64) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == id)
    }

    /// Create a party and return its id.
    pub fn add_party(&mut self, name: impl Into<String>, location: Option<String>) -> i64 {
        let id = self.parties.len() as i64 + 1;
        self.parties.push(Party {
            id,
            name: name.into(),
            location: location.filter(|l| !l.is_empty()),
            created_at: Utc::now(),
        });
        id
    }

    /// Attach an identifier to a party, moving it if another party owns it.
    pub fn add_identifier(&mut self, party_id: i64, identifier: &Identifier) {
        match self
            .identifiers
            .iter_mut()
            .find(|s| s.kind == identifier.kind && s.value == identifier.value)
        {
            Some(existing) => existing.party_id = party_id,
            None => self.identifiers.push(StoredIdentifier {
                party_id,
                kind: identifier.kind,
                value: identifier.value.clone(),
            }),
        }
    }

    /// Record a transaction and return its id.
    pub fn add_transaction(
        &mut self,
        party_id: i64,
        amount: Decimal,
        transaction_date: chrono::NaiveDate,
        payment_mode: Option<PaymentMode>,
        narration: Option<String>,
    ) -> i64 {
        let id = self.transactions.len() as i64 + 1;
        self.transactions.push(StoredTransaction {
            id,
            party_id,
            amount,
            transaction_date,
            payment_mode,
            narration: narration.filter(|n| !n.is_empty()),
        });
        id
    }

    fn owner_of(&self, identifier: &Identifier) -> Option<i64> {
        self.identifiers
            .iter()
            .find(|s| s.kind == identifier.kind && s.value == identifier.value)
            .map(|s| s.party_id)
    }

    /// Import one parsed transaction and return the party it was attributed to.
    ///
    /// The owner of the first already-known identifier wins; otherwise a new
    /// party is created from the transaction's name and location.
    pub fn ingest(&mut self, record: &ImportRecord) -> i64 {
        let tx = &record.transaction;
        let party_id = match record.identifiers.iter().find_map(|id| self.owner_of(id)) {
            Some(id) => {
                debug!("Attributing {} to existing party {}", tx.party_name, id);
                id
            }
            None => self.add_party(tx.party_name.clone(), Some(tx.location.clone())),
        };

        for identifier in &record.identifiers {
            self.add_identifier(party_id, identifier);
        }
        self.add_transaction(
            party_id,
            tx.amount,
            tx.date,
            Some(tx.payment_mode),
            Some(tx.narration.clone()),
        );
        party_id
    }

    /// Import every record, returning the party id of each.
    pub fn ingest_all<'a>(&mut self, records: impl IntoIterator<Item = &'a ImportRecord>) -> Vec<i64> {
        records.into_iter().map(|r| self.ingest(r)).collect()
    }
}

impl PartyStore for MemoryPartyStore {
    fn find_parties_by_identifier_values(
        &self,
        values: &[String],
    ) -> Result<Vec<PartyMatchRow>, StoreError> {
        let rows = self
            .identifiers
            .iter()
            .filter(|s| values.contains(&s.value))
            .map(|s| {
                let party = self
                    .party(s.party_id)
                    .cloned()
                    .ok_or_else(|| StoreError::NotFound(format!("party {}", s.party_id)))?;
                Ok(PartyMatchRow {
                    party,
                    matched_type: s.kind.as_str().to_string(),
                    matched_value: s.value.clone(),
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;
        Ok(rows)
    }

    fn find_parties_by_narration_substring(&self, needle: &str) -> Result<Vec<Party>, StoreError> {
        let needle = needle.to_uppercase();
        let mut ids: Vec<i64> = Vec::new();
        for tx in &self.transactions {
            let hit = tx
                .narration
                .as_deref()
                .is_some_and(|n| n.to_uppercase().contains(&needle));
            if hit && !ids.contains(&tx.party_id) {
                ids.push(tx.party_id);
            }
        }
        Ok(self
            .parties
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    fn get_party_transaction_stats(&self, party_id: i64) -> Result<PartyStats, StoreError> {
        if self.party(party_id).is_none() {
            return Err(StoreError::NotFound(format!("party {party_id}")));
        }
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.party_id == party_id)
            .fold(PartyStats::default(), |mut stats, t| {
                stats.transaction_count += 1;
                stats.total_amount += t.amount;
                stats
            }))
    }

    fn get_recent_transactions(
        &self,
        party_id: i64,
        limit: usize,
    ) -> Result<Vec<StoredTransaction>, StoreError> {
        let mut recent: Vec<StoredTransaction> = self
            .transactions
            .iter()
            .filter(|t| t.party_id == party_id)
            .cloned()
            .collect();
        recent.sort_by_key(|t| Reverse(t.transaction_date));
        recent.truncate(limit);
        Ok(recent)
    }
}
