// File: src/manifest.rs
//! Training/testing manifests and document token streams.

use crate::core::normalizer::Normalizer;
use crate::error::{Result, TcError};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One `<document-path> <label>` record of a training manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingEntry {
    pub document: String,
    pub label: String,
}

impl TrainingEntry {
    pub fn new(document: impl Into<String>, label: impl Into<String>) -> Self {
        Self { document: document.into(), label: label.into() }
    }
}

/// Pairs up whitespace-delimited tokens. A trailing path with no label is
/// ignored.
pub fn parse_training(text: &str) -> Vec<TrainingEntry> {
    let mut tokens = text.split_whitespace();
    let mut entries = Vec::new();
    while let (Some(document), Some(label)) = (tokens.next(), tokens.next()) {
        entries.push(TrainingEntry::new(document, label));
    }
    entries
}

/// Every whitespace-delimited token is a document path.
pub fn parse_testing(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

pub fn read_training(path: &str) -> Result<Vec<TrainingEntry>> {
    fs::read_to_string(path)
        .map(|text| parse_training(&text))
        .map_err(|source| TcError::TrainingManifest { path: path.to_string(), source })
}

pub fn read_testing(path: &str) -> Result<Vec<String>> {
    fs::read_to_string(path)
        .map(|text| parse_testing(&text))
        .map_err(|source| TcError::TestingManifest { path: path.to_string(), source })
}

/// Opens a document for buffered streaming.
pub fn open_document(path: &str) -> Result<BufReader<File>> {
    File::open(Path::new(path))
        .map(BufReader::new)
        .map_err(|source| TcError::Document { path: path.to_string(), source })
}

/// Streams the normalized tokens of a document into `sink`.
///
/// Any I/O failure, on open or midway, is reported as `TcError::Document`,
/// possibly after some tokens were already delivered.
pub fn for_each_term<F>(path: &str, normalizer: &Normalizer, sink: F) -> Result<()>
where
    F: FnMut(String),
{
    for_each_term_in(open_document(path)?, path, normalizer, sink)
}

/// Like `for_each_term`, over an already opened reader. `path` only labels
/// errors.
///
/// Input is read line by line; invalid UTF-8 is replaced rather than
/// rejected.
pub fn for_each_term_in<R, F>(mut reader: R, path: &str, normalizer: &Normalizer, mut sink: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(String),
{
    let doc_err = |source: io::Error| TcError::Document { path: path.to_string(), source };

    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).map_err(doc_err)? == 0 {
            return Ok(());
        }
        String::from_utf8_lossy(&line)
            .split_whitespace()
            .filter_map(|raw| normalizer.normalize(raw))
            .for_each(&mut sink);
    }
}
