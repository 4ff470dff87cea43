// File: src/core/model.rs
use crate::core::types::{ClassIndex, ClassStats, CountVector};
use std::collections::{BTreeMap, HashMap};

/// Multinomial Naive Bayes counts.
///
/// Built in two phases by the trainer: every label is registered first, then
/// term counts are added. Once training returns, the model is only read, and
/// can be shared across threads without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    total_terms: usize,
    document_count: u64,
    total_labels: usize,
    term_counts: HashMap<String, CountVector>,
    /// Keyed by label; iteration order (lexicographic) decides ties.
    class_stats: BTreeMap<String, ClassStats>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct terms in the vocabulary.
    pub fn total_terms(&self) -> usize {
        self.total_terms
    }

    /// Training documents, minus those that could not be read.
    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    pub fn total_labels(&self) -> usize {
        self.total_labels
    }

    pub fn is_empty(&self) -> bool {
        self.total_labels == 0
    }

    pub fn term_counts(&self, term: &str) -> Option<&[u64]> {
        self.term_counts.get(term).map(Vec::as_slice)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.term_counts.contains_key(term)
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.term_counts.keys().map(String::as_str)
    }

    pub fn class_stats(&self, label: &str) -> Option<&ClassStats> {
        self.class_stats.get(label)
    }

    /// Classes in lexicographic label order.
    pub fn classes(&self) -> impl Iterator<Item = (&str, &ClassStats)> {
        self.class_stats.iter().map(|(label, stats)| (label.as_str(), stats))
    }

    /// Records one training document for `label`, assigning the label the next
    /// free index on first sight. Returns the label's index.
    ///
    /// The trainer registers every label before counting any term. A label
    /// first seen after that still gets a smoothing slot in every existing
    /// count vector, so vectors always cover all classes.
    pub fn register_document(&mut self, label: &str) -> ClassIndex {
        let next_index = self.total_labels;
        let stats = self
            .class_stats
            .entry(label.to_string())
            .or_insert_with(|| ClassStats::new(next_index));
        if stats.document_count == 0 {
            self.total_labels += 1;
            for counts in self.term_counts.values_mut() {
                counts.resize(self.total_labels, 1);
            }
        }
        stats.document_count += 1;
        self.document_count += 1;
        stats.index
    }

    /// A registered document turned out to be unreadable.
    ///
    /// Only the overall total is corrected; the label's own document count
    /// still includes it.
    pub fn forget_document(&mut self) {
        self.document_count = self.document_count.saturating_sub(1);
    }

    /// Adds `occurrences` of `term` to the class `label`.
    ///
    /// A term seen for the first time gets a count vector sized to the labels
    /// registered so far, every slot preset to 1. Returns `false`, leaving the
    /// model untouched, if `label` was never registered.
    pub fn add_term(&mut self, label: &str, term: &str, occurrences: u64) -> bool {
        let Some(stats) = self.class_stats.get_mut(label) else {
            return false;
        };
        if !self.term_counts.contains_key(term) {
            self.total_terms += 1;
            self.term_counts.insert(term.to_string(), vec![1; self.total_labels]);
        }
        if let Some(slot) = self.term_counts.get_mut(term).and_then(|c| c.get_mut(stats.index)) {
            *slot += occurrences;
        }
        stats.token_count += occurrences;
        true
    }
}
