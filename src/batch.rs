// File: src/batch.rs
use crate::core::classifier::Classifier;
use crate::error::{Result, TcError};
use rayon::prelude::*;
use std::fs;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// The label chosen for one test document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub document: String,
    pub label: String,
}

/// Classifies every document of a testing manifest, in manifest order.
///
/// Documents that cannot be classified are logged and left out of the
/// results.
pub fn run_test(classifier: &Classifier<'_>, documents: &[String], parallel: bool) -> Vec<Prediction> {
    let predict = |document: &String| match classifier.classify_document(document) {
        Ok(label) => Some(Prediction { document: document.clone(), label }),
        Err(e) => {
            warn!("{e}; no prediction made");
            None
        }
    };

    let predictions: Vec<Prediction> = if parallel {
        documents.par_iter().filter_map(predict).collect()
    } else {
        documents.iter().filter_map(predict).collect()
    };
    info!(documents = documents.len(), predicted = predictions.len(), "testing complete");
    predictions
}

/// One `"<document> <label>"` line per prediction.
pub fn render(predictions: &[Prediction]) -> String {
    predictions
        .iter()
        .map(|p| format!("{} {}\n", p.document, p.label))
        .collect()
}

/// Writes the rendered predictions to `path`, replacing it atomically.
pub fn write_predictions(predictions: &[Prediction], path: &Path) -> Result<()> {
    let output_err = |source: Error| TcError::Output { path: path.display().to_string(), source };

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let temp_file = NamedTempFile::new_in(parent_dir).map_err(output_err)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(render(predictions).as_bytes()).map_err(output_err)?;
        writer.flush().map_err(output_err)?;
    }
    temp_file.persist(path).map_err(|e| output_err(e.error))?;
    info!(path = %path.display(), lines = predictions.len(), "results written");
    Ok(())
}
