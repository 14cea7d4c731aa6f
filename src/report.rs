use crate::analyser::is_letter;
use crate::loader::BOOKS_DIR;
use crate::stats::{AnalysisResult, CharacterFrequency};

/// Alphabetic entries sorted by count, highest first.
///
/// The sort is stable, so equal counts keep first-seen order.
pub fn sorted_letters(frequencies: &CharacterFrequency) -> Vec<(char, usize)> {
    let mut letters: Vec<(char, usize)> = frequencies
        .iter()
        .filter(|(ch, _)| is_letter(*ch))
        .collect();
    letters.sort_by(|a, b| b.1.cmp(&a.1));
    letters
}

pub fn format_report(title: &str, word_count: usize, frequencies: &CharacterFrequency) -> String {
    let mut report = format!("--- Begin report of {BOOKS_DIR}/{title}.txt ---\n");
    report.push_str(&format!("{word_count} words found in the document.\n"));
    report.push('\n');

    for (ch, count) in sorted_letters(frequencies) {
        report.push_str(&format!("The '{ch}' character was found {count} times.\n"));
    }

    report.push('\n');
    report.push_str("--- End report ---");
    report
}

pub fn render(result: &AnalysisResult) -> String {
    format_report(&result.title, result.word_count, &result.frequencies)
}
