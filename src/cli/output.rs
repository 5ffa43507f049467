//! Output formatting for CLI commands.

use std::fmt;

use serde::Serialize;

use crate::cli::args::{DalilArgs, OutputFormat};
use crate::error::Result;
use crate::search::intent::SearchIntent;
use crate::search::response::Locale;
use crate::search::scoring::ScoredCandidate;

/// One ranked record in a search report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub city: String,
    pub score: f64,
    pub reasons: Vec<String>,
}

impl ResultRow {
    pub fn from_scored(rank: usize, candidate: &ScoredCandidate<'_>, locale: Locale) -> Self {
        Self {
            rank,
            id: candidate.record.id.clone(),
            name: candidate.record.display_name(locale).to_string(),
            city: candidate.record.city.clone(),
            score: candidate.score,
            reasons: candidate.reason_tags(),
        }
    }
}

/// Result structure for the search command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub query: String,
    pub locale: Locale,
    pub response: String,
    pub candidates: usize,
    pub duration_ms: u64,
    pub intent: SearchIntent,
    pub results: Vec<ResultRow>,
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.response)?;
        writeln!(f)?;
        writeln!(f, "Results:")?;
        writeln!(f, "════════")?;
        if self.results.is_empty() {
            writeln!(f, "(none)")?;
        }
        for row in &self.results {
            write!(f, "{:>2}. {} (Score: {:.3})", row.rank, row.name, row.score)?;
            if !row.city.is_empty() {
                write!(f, " - {}", row.city)?;
            }
            writeln!(f)?;
            if !row.reasons.is_empty() {
                writeln!(f, "    {}", row.reasons.join(", "))?;
            }
        }
        write!(
            f,
            "\n{} of {} candidates in {} ms",
            self.results.len(),
            self.candidates,
            self.duration_ms
        )
    }
}

/// Result structure for the intent command.
#[derive(Debug, Clone, Serialize)]
pub struct IntentReport {
    pub intent: SearchIntent,
}

impl fmt::Display for IntentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let intent = &self.intent;
        let entities = &intent.entities;
        writeln!(f, "query: {}", intent.raw_query)?;
        writeln!(f, "language: {}", intent.language)?;
        writeln!(f, "type: {}", intent.intent_type)?;
        writeln!(f, "tokens: {}", format_list(&intent.tokens))?;
        writeln!(f, "core query: {}", intent.core_query)?;
        writeln!(f, "city: {}", format_option(entities.city.as_deref()))?;
        writeln!(f, "category: {}", format_option(entities.category_id.as_deref()))?;
        let attributes: Vec<String> = entities.attributes.iter().map(ToString::to_string).collect();
        writeln!(f, "attributes: {}", format_list(&attributes))?;
        write!(f, "tags: {}", format_list(&entities.tags))
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + fmt::Display>(
    message: &str,
    result: &T,
    args: &DalilArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(message: &str, result: &T, args: &DalilArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{result}");
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &DalilArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_list(values: &[String]) -> String {
    format!("[{}]", values.join(", "))
}

fn format_option(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
