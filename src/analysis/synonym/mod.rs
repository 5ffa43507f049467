//! Synonym handling for query expansion.

pub mod dictionary;

pub use dictionary::SynonymDictionary;
