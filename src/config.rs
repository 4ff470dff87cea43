// File: src/config.rs
use crate::core::normalizer::Normalizer;
use crate::core::stemmer::{IdentityStemmer, PorterStemmer, Stemmer};
use crate::core::stopwords::StopWords;
use crate::error::{Result, TcError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Stop list looked up in the working directory when none is configured.
pub const DEFAULT_STOPLIST: &str = "english.stop";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    #[default]
    Porter,
    None,
}

impl StemmerKind {
    pub fn build(self) -> Arc<dyn Stemmer> {
        match self {
            StemmerKind::Porter => Arc::new(PorterStemmer::new()),
            StemmerKind::None => Arc::new(IdentityStemmer),
        }
    }
}

/// Settings that shape normalization and scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TcConfig {
    pub stoplist: PathBuf,
    pub stemmer: StemmerKind,
    pub parallel: bool,
}

impl Default for TcConfig {
    fn default() -> Self {
        Self {
            stoplist: PathBuf::from(DEFAULT_STOPLIST),
            stemmer: StemmerKind::default(),
            parallel: false,
        }
    }
}

impl TcConfig {
    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| TcError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| TcError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads the stop list (an unreadable one only warns) and picks the stemmer.
    pub fn build_normalizer(&self) -> Normalizer {
        Normalizer::new(StopWords::load_or_empty(&self.stoplist), self.stemmer.build())
    }
}
