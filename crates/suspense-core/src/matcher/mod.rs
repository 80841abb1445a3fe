//! Party matching: rank stored parties against a narration.

mod engine;
mod memory;
mod scoring;
mod store;

pub use engine::{narration_patterns, Matcher};
pub use memory::MemoryPartyStore;
pub use scoring::{confidence, history_boost, MAX_CONFIDENCE};
pub use store::PartyStore;
