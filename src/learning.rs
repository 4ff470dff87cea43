// File: src/learning.rs
use crate::core::model::Model;
use crate::core::normalizer::Normalizer;
use crate::error::Result;
use crate::manifest::{for_each_term_in, open_document, TrainingEntry};
use rayon::prelude::*;
use std::collections::HashMap;
use std::io::BufRead;
use tracing::{debug, info, warn};

/// Term occurrences within a single document.
type DocumentCounts = HashMap<String, u64>;

/// Documents scanned concurrently before their counts are merged. Bounds the
/// number of per-document maps held at once.
const SCAN_CHUNK: usize = 256;

/// Builds a `Model` from a training manifest.
pub struct Trainer<'a> {
    normalizer: &'a Normalizer,
    parallel: bool,
}

impl<'a> Trainer<'a> {
    pub fn new(normalizer: &'a Normalizer) -> Self {
        Self { normalizer, parallel: false }
    }

    /// Scan documents on the rayon pool. The model is identical either way.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Two passes: every label is registered before any document is read, so
    /// each new term's count vector covers all classes.
    pub fn train(&self, manifest: &[TrainingEntry]) -> Model {
        let mut model = Model::new();
        for entry in manifest {
            model.register_document(&entry.label);
        }
        debug!(classes = model.total_labels(), documents = manifest.len(), "classes registered");

        if self.parallel {
            for chunk in manifest.chunks(SCAN_CHUNK) {
                let scanned: Vec<_> = chunk.par_iter().map(|e| self.scan(&e.document)).collect();
                for (entry, counts) in chunk.iter().zip(scanned) {
                    Self::absorb(&mut model, entry, counts);
                }
            }
        } else {
            for entry in manifest {
                let counts = self.scan(&entry.document);
                Self::absorb(&mut model, entry, counts);
            }
        }

        info!(
            documents = model.document_count(),
            classes = model.total_labels(),
            terms = model.total_terms(),
            "training complete"
        );
        model
    }

    fn scan(&self, document: &str) -> Result<DocumentCounts> {
        self.count_terms(open_document(document)?, document)
    }

    fn count_terms<R: BufRead>(&self, reader: R, document: &str) -> Result<DocumentCounts> {
        let mut counts = DocumentCounts::new();
        for_each_term_in(reader, document, self.normalizer, |term| {
            *counts.entry(term).or_insert(0) += 1;
        })?;
        Ok(counts)
    }

    fn absorb(model: &mut Model, entry: &TrainingEntry, counts: Result<DocumentCounts>) {
        match counts {
            Ok(counts) => {
                debug!(document = %entry.document, label = %entry.label, terms = counts.len(), "document counted");
                // Sorted so that vocabulary growth does not depend on hash order.
                let mut counts: Vec<_> = counts.into_iter().collect();
                counts.sort_unstable();
                for (term, n) in counts {
                    model.add_term(&entry.label, &term, n);
                }
            }
            Err(e) => {
                warn!("{e}; skipping training document");
                model.forget_document();
            }
        }
    }
}
