//! Party lookup interface consumed by the matcher.

use crate::error::StoreError;
use crate::models::{Party, PartyMatchRow, PartyStats, StoredTransaction};

/// Read access to parties and their history.
///
/// Implemented by the surrounding application over its database; this crate
/// ships [`MemoryPartyStore`](super::MemoryPartyStore).
pub trait PartyStore {
    /// Every `(party, identifier)` row whose identifier value is one of `values`.
    fn find_parties_by_identifier_values(
        &self,
        values: &[String],
    ) -> Result<Vec<PartyMatchRow>, StoreError>;

    /// Parties with a stored transaction narration containing `needle`, case-insensitively.
    fn find_parties_by_narration_substring(&self, needle: &str) -> Result<Vec<Party>, StoreError>;

    fn get_party_transaction_stats(&self, party_id: i64) -> Result<PartyStats, StoreError>;

    /// Latest transactions of one party row, newest first.
    fn get_recent_transactions(
        &self,
        party_id: i64,
        limit: usize,
    ) -> Result<Vec<StoredTransaction>, StoreError>;
}

impl<T: PartyStore + ?Sized> PartyStore for &T {
    fn find_parties_by_identifier_values(
        &self,
        values: &[String],
    ) -> Result<Vec<PartyMatchRow>, StoreError> {
        (**self).find_parties_by_identifier_values(values)
    }

    fn find_parties_by_narration_substring(&self, needle: &str) -> Result<Vec<Party>, StoreError> {
        (**self).find_parties_by_narration_substring(needle)
    }

    fn get_party_transaction_stats(&self, party_id: i64) -> Result<PartyStats, StoreError> {
        (**self).get_party_transaction_stats(party_id)
    }

    fn get_recent_transactions(
        &self,
        party_id: i64,
        limit: usize,
    ) -> Result<Vec<StoredTransaction>, StoreError> {
        (**self).get_recent_transactions(party_id, limit)
    }
}
