//! Command implementations for the Dalil CLI.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::EngineConfig;
use crate::document::{CategoryRecord, load_candidates, load_categories};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::search::engine::SmartSearchEngine;
use crate::search::response::ConversationTurn;

/// Execute a CLI command.
pub fn execute_command(args: DalilArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args, &args),
        Command::Intent(intent_args) => run_intent(intent_args, &args),
    }
}

/// Build an engine from the optional config and lexicon files.
pub fn build_engine(engine_args: &EngineArgs) -> Result<SmartSearchEngine> {
    let config = match &engine_args.config {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            EngineConfig::from_file(path)?
        }
        None => EngineConfig::default(),
    };

    let lexicon = match &engine_args.lexicon {
        Some(path) => {
            info!("Loading lexicon from: {}", path.display());
            Arc::new(Lexicon::from_file(path)?)
        }
        None => Lexicon::shared(),
    };

    Ok(SmartSearchEngine::with_lexicon(lexicon, config))
}

fn read_categories(path: Option<&Path>) -> Result<Vec<CategoryRecord>> {
    match path {
        Some(path) => load_categories(path),
        None => Ok(Vec::new()),
    }
}

/// Rank records against a query and print the response.
fn run_search(args: &SearchArgs, cli_args: &DalilArgs) -> Result<()> {
    let engine = build_engine(&args.engine)?;
    let candidates = load_candidates(&args.records)?;
    let categories = read_categories(args.engine.categories.as_deref())?;
    let locale = args.engine.locale;
    debug!(
        "Loaded {} records and {} categories",
        candidates.len(),
        categories.len()
    );

    let start_time = Instant::now();
    let search = engine.smart_search(&args.query, &candidates, &categories, locale, args.limit);
    let history: Vec<ConversationTurn> = args
        .history
        .iter()
        .map(|message| ConversationTurn::user(message.as_str()))
        .collect();
    let response = engine.generate_response(
        &args.query,
        &search.results,
        &search.intent,
        &categories,
        locale,
        &history,
    );
    let duration = start_time.elapsed();

    let report = SearchReport {
        query: args.query.clone(),
        locale,
        response,
        candidates: candidates.len(),
        duration_ms: duration.as_millis() as u64,
        results: search
            .results
            .iter()
            .enumerate()
            .map(|(i, candidate)| ResultRow::from_scored(i + 1, candidate, locale))
            .collect(),
        intent: search.intent,
    };

    output_result("Search completed", &report, cli_args)
}

/// Print the understood form of a query.
fn run_intent(args: &IntentArgs, cli_args: &DalilArgs) -> Result<()> {
    let engine = build_engine(&args.engine)?;
    let categories = read_categories(args.engine.categories.as_deref())?;

    let report = IntentReport {
        intent: engine.extract_intent(&args.query, &categories, args.engine.locale),
    };

    output_result("Intent extracted", &report, cli_args)
}
