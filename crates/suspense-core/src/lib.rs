//! Core library for receipt-book ingestion.
//!
//! This crate provides:
//! - Receipt-book and sale-bill parsing into typed transactions
//! - Payment identifier extraction from bank narrations (UPI, IMPS, NEFT, cash deposits)
//! - Party matching against a store of known identifiers and history

pub mod error;
pub mod extract;
pub mod matcher;
pub mod models;
pub mod patterns;
pub mod receipt;

pub use error::{Result, StoreError, SuspenseError};
pub use extract::IdentifierExtractor;
pub use matcher::{Matcher, MemoryPartyStore, PartyStore};
pub use models::{
    Identifier, IdentifierType, ImportRecord, MatchCandidate, MatchedIdentifier, MatcherConfig,
    ParsedTransaction, ParserConfig, Party, PartyMatchRow, PartyStats, PaymentMode, SaleBill,
    SearchOutcome, StoredTransaction, SuspenseConfig,
};
pub use receipt::{LedgerParser, ReceiptParser, SaleBillParser};
