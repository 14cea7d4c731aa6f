use std::collections::HashMap;

/// Occurrence count per casefolded character.
///
/// Keys are remembered in the order they were first seen, and every
/// iteration follows that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterFrequency {
    counts: HashMap<char, usize>,
    order: Vec<char>,
}

impl CharacterFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, ch: char) {
        match self.counts.get_mut(&ch) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(ch, 1);
                self.order.push(ch);
            }
        }
    }

    pub fn get(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(char, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.order.iter().map(|ch| (*ch, self.counts[ch]))
    }
}

impl FromIterator<char> for CharacterFrequency {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut frequency = Self::new();
        for ch in iter {
            frequency.increment(ch);
        }
        frequency
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub title: String,
    pub word_count: usize,
    pub frequencies: CharacterFrequency,
}
