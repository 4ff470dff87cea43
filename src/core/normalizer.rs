// File: src/core/normalizer.rs
use crate::core::stemmer::{PorterStemmer, Stemmer};
use crate::core::stopwords::StopWords;
use std::sync::Arc;

/// Turns raw whitespace-delimited tokens into terms.
///
/// A token is stripped to its alphanumeric characters, lowercased, stemmed,
/// and finally dropped if the stem is empty or stop-listed.
#[derive(Clone)]
pub struct Normalizer {
    stopwords: Arc<StopWords>,
    stemmer: Arc<dyn Stemmer>,
}

impl Normalizer {
    pub fn new(stopwords: StopWords, stemmer: Arc<dyn Stemmer>) -> Self {
        Self { stopwords: Arc::new(stopwords), stemmer }
    }

    /// Porter stemming with the given stop list.
    pub fn english(stopwords: StopWords) -> Self {
        Self::new(stopwords, Arc::new(PorterStemmer::new()))
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Returns the term for `raw`, or `None` if the token is discarded.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        // Lowercasing can emit combining marks (e.g. for 'İ'), so the filter
        // runs again afterwards to keep the result stable under renormalizing.
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphanumeric())
            .collect();
        if cleaned.is_empty() {
            return None;
        }

        let stem = self.stemmer.stem(&cleaned);
        if stem.is_empty() || self.stopwords.contains(&stem) {
            return None;
        }
        Some(stem.into_owned())
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}
