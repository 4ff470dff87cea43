// File: src/core/stopwords.rs
use crate::error::{Result, TcError};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// A read-only set of words the normalizer discards.
///
/// Built once and handed to the `Normalizer`, so separate normalizers can
/// run with separate lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { words: words.into_iter().map(Into::into).collect() }
    }

    /// Parses a whitespace-delimited list, one stop word per token.
    /// Words are stored verbatim.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| TcError::StopList {
            path: path.display().to_string(),
            source,
        })?;
        let list = Self::parse(&text);
        info!(path = %path.display(), words = list.len(), "loaded stop list");
        Ok(list)
    }

    /// Like `load`, but a missing or unreadable file only disables filtering.
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("{e}; continuing without a stop list");
            Self::empty()
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
