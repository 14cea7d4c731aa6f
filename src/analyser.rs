use std::time::Instant;
use tracing::info;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::stats::{AnalysisResult, CharacterFrequency};

/// Full text of one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus(String);

impl Corpus {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Number of maximal runs of non-whitespace characters.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// True for the letter categories Lu, Ll, Lt, Lm and Lo.
///
/// Letter numbers such as 'Ⅻ', combining marks and circled letters are not
/// letters here.
pub fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Lower-cases letters; every other character is returned as is.
///
/// Letters whose lowercase form spans several characters (e.g. 'İ') keep
/// their original form so that each input character maps to one key.
pub fn casefold(ch: char) -> char {
    if !is_letter(ch) {
        return ch;
    }

    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

/// Counts every character of `text`, whitespace and punctuation included.
pub fn character_frequency(text: &str) -> CharacterFrequency {
    text.chars().map(casefold).collect()
}

/// Owns a loaded corpus and derives its statistics.
#[derive(Debug)]
pub struct CorpusAnalyser {
    title: String,
    corpus: Corpus,
}

impl CorpusAnalyser {
    pub fn new(title: impl Into<String>, corpus: Corpus) -> Self {
        Self {
            title: title.into(),
            corpus,
        }
    }

    pub fn into_corpus(self) -> Corpus {
        self.corpus
    }

    pub fn word_count(&self) -> usize {
        word_count(self.corpus.as_str())
    }

    pub fn character_frequency(&self) -> CharacterFrequency {
        character_frequency(self.corpus.as_str())
    }

    pub fn analyse(&self) -> AnalysisResult {
        let start_time = Instant::now();
        let result = AnalysisResult {
            title: self.title.clone(),
            word_count: self.word_count(),
            frequencies: self.character_frequency(),
        };

        info!(
            action = "complete",
            component = "corpus_analysis",
            word_count = result.word_count,
            unique_characters = result.frequencies.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Corpus analysed"
        );
        result
    }
}
