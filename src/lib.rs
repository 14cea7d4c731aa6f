pub mod analyser;
pub mod args;
pub mod book;
pub mod error;
pub mod loader;
pub mod report;
pub mod stats;
pub mod utils;

pub use analyser::{character_frequency, word_count, Corpus, CorpusAnalyser};
pub use args::Args;
pub use book::{analyze_book, print_analysis_results, BookAnalysis};
pub use error::CorpusError;
pub use loader::CorpusLoader;
pub use report::format_report;
pub use stats::{AnalysisResult, CharacterFrequency};
