//! Error types for the Dalil library.
//!
//! The search pipeline itself never fails: empty queries, empty candidate
//! lists and unknown tokens all produce fewer (or zero) matches. Errors only
//! surface at the edges, when loading configuration, lexicon overrides or
//! directory data supplied by the caller.
//!
//! # Examples
//!
//! ```
//! use dalil::error::{DalilError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DalilError::invalid_argument("limit must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Dalil operations.
#[derive(Error, Debug)]
pub enum DalilError {
    /// I/O errors (reading config, lexicon or directory files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid engine configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid lexicon definition (bad intent pattern, empty group, ...)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Invalid argument passed by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with DalilError.
pub type Result<T> = std::result::Result<T, DalilError>;

impl DalilError {
    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DalilError::Config(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        DalilError::Lexicon(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DalilError::InvalidArgument(msg.into())
    }
}
