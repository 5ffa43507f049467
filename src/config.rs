//! Configuration for the search engine.
//!
//! Every scoring weight and matching threshold lives here so that ranking can
//! be retuned without touching the pipeline. Files are plain JSON; missing
//! keys fall back to the defaults.
//!
//! ```json
//! {
//!   "defaultLimit": 10,
//!   "weights": { "nameExact": 40.0, "cityMatch": 20.0 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DalilError, Result};
use crate::search::scoring::ScoringWeights;

/// Configuration for [`SmartSearchEngine`](crate::search::engine::SmartSearchEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Scoring weights.
    pub weights: ScoringWeights,

    /// Result limit used when the caller does not pass one.
    pub default_limit: usize,

    /// Queries are cut to this many characters before tokenization.
    pub max_query_chars: usize,

    /// Minimum fuzzy similarity (exclusive) for a token to name a category.
    pub category_match_threshold: f64,

    /// Minimum fuzzy similarity (exclusive) for name and tag fuzzy signals.
    pub fuzzy_match_threshold: f64,

    /// How many results the response text lists before "+N more".
    pub max_listed_results: usize,

    /// Candidate count at which scoring moves onto the rayon pool.
    /// Result order is identical either way.
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            default_limit: 20,
            max_query_chars: 200,
            category_match_threshold: 0.75,
            fuzzy_match_threshold: 0.65,
            max_listed_results: 5,
            parallel_threshold: 512,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DalilError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Set the default result limit.
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the parallel scoring threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;

        if self.default_limit == 0 {
            return Err(DalilError::config("defaultLimit must be at least 1"));
        }
        if self.max_query_chars == 0 {
            return Err(DalilError::config("maxQueryChars must be at least 1"));
        }
        for (name, value) in [
            ("categoryMatchThreshold", self.category_match_threshold),
            ("fuzzyMatchThreshold", self.fuzzy_match_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DalilError::config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        Ok(())
    }
}
