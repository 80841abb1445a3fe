//! Data models.

pub mod config;
pub mod identifier;
pub mod party;
pub mod transaction;

pub use config::{MatcherConfig, ParserConfig, SuspenseConfig};
pub use identifier::{Identifier, IdentifierType};
pub use party::{
    MatchCandidate, MatchedIdentifier, Party, PartyMatchRow, PartyStats, SearchOutcome,
    StoredIdentifier, StoredTransaction, NARRATION_MATCH_TYPE,
};
pub use transaction::{ImportRecord, ParsedTransaction, PaymentMode, SaleBill};
