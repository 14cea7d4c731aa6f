use anyhow::Result;
use bookbot::{analyze_book, print_analysis_results, utils, Args};
use clap::Parser;
use tracing::error;

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    match analyze_book(&args) {
        Ok(analysis) => {
            print_analysis_results(&analysis, &args);
            Ok(())
        }
        Err(e) => {
            error!(action = "error", component = "main", error = %format!("{e:#}"), "Analysis failed");
            Err(e)
        }
    }
}
