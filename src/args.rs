use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bookbot",
    about = "Count the words and characters of a book under books/",
    version,
    long_about = None
)]
pub struct Args {
    /// Title of the book to analyze, without the .txt extension
    #[arg(default_value = "frankenstein")]
    pub title: String,

    /// Working directory containing the books/ folder
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Print the first N characters of the book before the report
    #[arg(short, long)]
    pub preview: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
