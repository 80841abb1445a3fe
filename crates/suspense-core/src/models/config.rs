//! Configuration structures for the ingestion pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SuspenseError};

/// Main configuration for the suspense pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuspenseConfig {
    /// Receipt-book parsing configuration.
    pub parser: ParserConfig,

    /// Party matching configuration.
    pub matcher: MatcherConfig,
}

/// Receipt-book parser configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Year for month/day dates when neither the caller nor the ledger header supplies one.
    pub default_year: Option<i32>,

    /// Place names added to the built-in gazetteer.
    pub extra_locations: Vec<String>,

    /// Trailing words that must never be split off as a location.
    pub extra_non_locations: Vec<String>,
}

/// Party matcher configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Recent transactions kept per candidate.
    pub recent_limit: usize,

    /// Starting confidence for narration-substring matches.
    pub narration_confidence: f64,

    /// Boost per decade of transaction history.
    pub history_boost_factor: f64,

    /// Share of the remaining gap each additional identifier type closes.
    pub corroboration_factor: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            recent_limit: 5,
            narration_confidence: 40.0,
            history_boost_factor: 0.1,
            corroboration_factor: 0.5,
        }
    }
}

impl MatcherConfig {
    /// Reject settings the matcher cannot score with.
    pub fn validate(&self) -> Result<()> {
        if self.recent_limit == 0 {
            return Err(SuspenseError::Config(
                "matcher.recent_limit must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.narration_confidence) {
            return Err(SuspenseError::Config(format!(
                "matcher.narration_confidence must be within 0-100, got {}",
                self.narration_confidence
            )));
        }
        if self.history_boost_factor < 0.0 || self.history_boost_factor.is_nan() {
            return Err(SuspenseError::Config(format!(
                "matcher.history_boost_factor must not be negative, got {}",
                self.history_boost_factor
            )));
        }
        if !(0.0..=1.0).contains(&self.corroboration_factor) {
            return Err(SuspenseError::Config(format!(
                "matcher.corroboration_factor must be within 0-1, got {}",
                self.corroboration_factor
            )));
        }
        Ok(())
    }
}

impl SuspenseConfig {
    /// Load and validate configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.matcher.validate()
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
