//! Directory records (businesses and categories) and their loaders.

pub mod loader;
pub mod record;

// Re-export commonly used types
pub use loader::{load_candidates, load_categories, parse_records};
pub use record::{CandidateRecord, CategoryRecord, LocalizedText};
