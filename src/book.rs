use anyhow::{Context, Result};
use std::time::Instant;
use tracing::info;

use crate::analyser::{Corpus, CorpusAnalyser};
use crate::loader::CorpusLoader;
use crate::stats::AnalysisResult;
use crate::{report, utils, Args};

/// Loaded book together with its statistics.
#[derive(Debug)]
pub struct BookAnalysis {
    pub corpus: Corpus,
    pub result: AnalysisResult,
}

pub fn analyze_book(args: &Args) -> Result<BookAnalysis> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "book_analysis", title = %args.title, root = ?args.root, "Starting book analysis");

    let loader = CorpusLoader::new(&args.root);
    let text = loader
        .load(&args.title)
        .with_context(|| format!("Failed to load book '{}'", args.title))?;

    let analyser = CorpusAnalyser::new(args.title.as_str(), Corpus::new(text));
    let result = analyser.analyse();

    info!(
        action = "complete",
        component = "book_analysis",
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(BookAnalysis {
        corpus: analyser.into_corpus(),
        result,
    })
}

pub fn print_analysis_results(analysis: &BookAnalysis, args: &Args) {
    if let Some(limit) = args.preview {
        utils::console_log(analysis.corpus.as_str(), Some(limit));
    }

    utils::console_log(&report::render(&analysis.result), None);
}
