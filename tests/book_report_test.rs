//! End-to-end tests: books on disk through to the rendered report.

use bookbot::{analyze_book, report, Args, CorpusError, CorpusLoader};
use clap::Parser;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn library_with(title: &str, text: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let books = dir.path().join("books");
    fs::create_dir(&books).unwrap();
    fs::write(books.join(format!("{title}.txt")), text).unwrap();
    dir
}

fn args_for(root: &Path, title: &str) -> Args {
    Args::parse_from(["bookbot", title, "--root", root.to_str().unwrap()])
}

#[test]
fn test_report_for_small_book() {
    let dir = library_with("aabb", "Aa bb");
    let analysis = analyze_book(&args_for(dir.path(), "aabb")).unwrap();

    assert_eq!(analysis.result.word_count, 2);
    assert_eq!(analysis.result.frequencies.get('a'), 2);
    assert_eq!(analysis.result.frequencies.get(' '), 1);
    assert_eq!(analysis.result.frequencies.get('b'), 2);
    assert_eq!(
        report::render(&analysis.result),
        "--- Begin report of books/aabb.txt ---\n\
         2 words found in the document.\n\
         \n\
         The 'a' character was found 2 times.\n\
         The 'b' character was found 2 times.\n\
         \n\
         --- End report ---"
    );
}

#[test]
fn test_report_for_empty_book() {
    let dir = library_with("empty", "");
    let analysis = analyze_book(&args_for(dir.path(), "empty")).unwrap();

    assert_eq!(analysis.result.word_count, 0);
    assert!(analysis.result.frequencies.is_empty());

    let rendered = report::render(&analysis.result);
    assert!(rendered.contains("0 words found in the document."));
    assert!(!rendered.contains("character was found"));
}

#[test]
fn test_tie_break_follows_first_seen_order() {
    let dir = library_with("greeting", "Hi! Hi?");
    let analysis = analyze_book(&args_for(dir.path(), "greeting")).unwrap();

    let rendered = report::render(&analysis.result);
    let h = rendered.find("The 'h' character").unwrap();
    let i = rendered.find("The 'i' character").unwrap();
    assert!(h < i);
}

#[test]
fn test_frequency_total_matches_book_length() {
    let text = "It was on a dreary night of November that I beheld\n\
                the accomplishment of my toils. Über alles, ÉTÉ!\n";
    let dir = library_with("excerpt", text);
    let analysis = analyze_book(&args_for(dir.path(), "excerpt")).unwrap();

    assert_eq!(analysis.result.frequencies.total(), text.chars().count());
    assert_eq!(analysis.result.word_count, text.split_whitespace().count());
    assert_eq!(analysis.corpus.as_str(), text);
}

#[test]
fn test_missing_book_produces_no_report() {
    let dir = library_with("frankenstein", "monster");

    let err = analyze_book(&args_for(dir.path(), "dracula")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CorpusError>(),
        Some(CorpusError::NotFound { .. })
    ));

    let loader = CorpusLoader::new(dir.path());
    assert!(matches!(
        loader.load("dracula"),
        Err(CorpusError::NotFound { .. })
    ));
}

#[test]
fn test_missing_books_directory_is_not_found() {
    let dir = TempDir::new().unwrap();
    let loader = CorpusLoader::new(dir.path());

    assert!(matches!(
        loader.resolve("frankenstein"),
        Err(CorpusError::NotFound { .. })
    ));
}
