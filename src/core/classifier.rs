// File: src/core/classifier.rs
use crate::core::model::Model;
use crate::core::normalizer::Normalizer;
use crate::error::{Result, TcError};
use crate::manifest::for_each_term;

/// Accumulated log10 scores, one per class index.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassScores {
    scores: Vec<f64>,
}

impl ClassScores {
    fn new(classes: usize) -> Self {
        Self { scores: vec![0.0; classes] }
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied()
    }
}

/// Maximum a posteriori labelling against a trained, read-only model.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    model: &'a Model,
    normalizer: &'a Normalizer,
}

impl<'a> Classifier<'a> {
    pub fn new(model: &'a Model, normalizer: &'a Normalizer) -> Self {
        Self { model, normalizer }
    }

    /// Adds the evidence of one term to every class.
    ///
    /// Known terms contribute `log10(count / (V + tokens_c))`. Unknown terms
    /// contribute `+log10(V + tokens_c)` without touching the vocabulary.
    pub fn accumulate(&self, scores: &mut ClassScores, term: &str) {
        let vocabulary = self.model.total_terms() as f64;
        let known = self.model.term_counts(term);
        for (_, stats) in self.model.classes() {
            let denominator = vocabulary + stats.token_count as f64;
            let evidence = match known {
                Some(counts) => {
                    let count = counts.get(stats.index).copied().unwrap_or(1);
                    (count as f64 / denominator).log10()
                }
                None => -(1.0 / denominator).log10(),
            };
            scores.scores[stats.index] += evidence;
        }
    }

    /// Scores a stream of already-normalized terms, priors excluded.
    pub fn likelihoods<I, S>(&self, terms: I) -> ClassScores
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scores = ClassScores::new(self.model.total_labels());
        for term in terms {
            self.accumulate(&mut scores, term.as_ref());
        }
        scores
    }

    /// Adds each class's log prior once and picks the best label.
    ///
    /// Classes are visited in label order and only a strictly greater score
    /// replaces the current best, so the first label wins ties.
    pub fn decide(&self, mut scores: ClassScores) -> Result<String> {
        let documents = self.model.document_count() as f64;
        let mut best: Option<(&str, f64)> = None;
        for (label, stats) in self.model.classes() {
            let score = &mut scores.scores[stats.index];
            *score += (stats.document_count as f64 / documents).log10();
            if best.map_or(true, |(_, top)| *score > top) {
                best = Some((label, *score));
            }
        }
        best.map(|(label, _)| label.to_string()).ok_or(TcError::EmptyModel)
    }

    /// Labels already-normalized terms.
    pub fn classify_terms<I, S>(&self, terms: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.decide(self.likelihoods(terms))
    }

    /// Labels raw text, normalizing each whitespace-delimited token.
    pub fn classify_text(&self, text: &str) -> Result<String> {
        self.classify_terms(text.split_whitespace().filter_map(|raw| self.normalizer.normalize(raw)))
    }

    /// Streams a document from disk and labels it.
    pub fn classify_document(&self, path: &str) -> Result<String> {
        if self.model.is_empty() {
            return Err(TcError::EmptyModel);
        }
        let mut scores = ClassScores::new(self.model.total_labels());
        for_each_term(path, self.normalizer, |term| self.accumulate(&mut scores, &term))?;
        self.decide(scores)
    }
}
