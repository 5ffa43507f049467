//! Common types for intent classification.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DalilError;

/// Coarse purpose of a directory query, used to steer response phrasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentType {
    /// Locate matching businesses (the default).
    #[default]
    Find,
    /// Ask for the best option.
    Recommend,
    /// Weigh two or more options against each other.
    Compare,
    /// Ask about a business (hours, address, contact).
    Info,
    /// List everything in a category or area.
    Browse,
}

impl IntentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentType::Find => "find",
            IntentType::Recommend => "recommend",
            IntentType::Compare => "compare",
            IntentType::Info => "info",
            IntentType::Browse => "browse",
        }
    }
}

impl std::fmt::Display for IntentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentType {
    type Err = DalilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "find" => Ok(IntentType::Find),
            "recommend" => Ok(IntentType::Recommend),
            "compare" => Ok(IntentType::Compare),
            "info" => Ok(IntentType::Info),
            "browse" => Ok(IntentType::Browse),
            other => Err(DalilError::invalid_argument(format!(
                "Unknown intent type: {other}"
            ))),
        }
    }
}
