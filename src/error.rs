// File: src/error.rs
use std::io;
use thiserror::Error;

/// Every failure the classifier can report.
///
/// Which of these are fatal is decided by the caller: the library only
/// returns them. The binary aborts on manifest, output and config errors and
/// logs-and-continues on document and stop list errors.
#[derive(Error, Debug)]
pub enum TcError {
    #[error("unable to read training set file {path}: {source}")]
    TrainingManifest { path: String, source: io::Error },

    #[error("unable to read testing set file {path}: {source}")]
    TestingManifest { path: String, source: io::Error },

    #[error("unable to write results to {path}: {source}")]
    Output { path: String, source: io::Error },

    #[error("unable to open document {path}: {source}")]
    Document { path: String, source: io::Error },

    #[error("unable to load stop list file {path}: {source}")]
    StopList { path: String, source: io::Error },

    #[error("unable to read config file {path}: {source}")]
    ConfigIo { path: String, source: io::Error },

    #[error("invalid config file {path}: {source}")]
    ConfigParse { path: String, source: serde_json::Error },

    #[error("unable to read gold labels file {path}: {source}")]
    GoldLabels { path: String, source: io::Error },

    #[error("model has no classes; train it on a non-empty manifest first")]
    EmptyModel,
}

pub type Result<T> = std::result::Result<T, TcError>;
