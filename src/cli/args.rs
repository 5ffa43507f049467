//! Command line argument parsing for the Dalil CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::search::response::Locale;

/// Dalil - bilingual smart search over a business directory
#[derive(Parser, Debug, Clone)]
#[command(name = "dalil")]
#[command(about = "Bilingual (Arabic/English) smart search over a business directory")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DalilArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DalilArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank directory records against a query and compose a response
    Search(SearchArgs),

    /// Show how a query is understood
    Intent(IntentArgs),
}

/// Options shared by every command.
#[derive(Parser, Debug, Clone)]
pub struct EngineArgs {
    /// Category file (JSON array or JSONL)
    #[arg(short, long, value_name = "CATEGORY_FILE")]
    pub categories: Option<PathBuf>,

    /// Response and fallback query language (ar or en)
    #[arg(short, long, default_value = "en")]
    pub locale: Locale,

    /// Engine configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Lexicon file (JSON) replacing or extending the builtin tables
    #[arg(long, value_name = "LEXICON_FILE")]
    pub lexicon: Option<PathBuf>,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Directory record file (JSON array or JSONL)
    #[arg(short, long, value_name = "RECORD_FILE")]
    pub records: PathBuf,

    /// Maximum number of results (defaults to the configured limit)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Earlier user messages of the conversation, oldest first
    #[arg(long = "history", value_name = "MESSAGE")]
    pub history: Vec<String>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for intent extraction
#[derive(Parser, Debug, Clone)]
pub struct IntentArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}
