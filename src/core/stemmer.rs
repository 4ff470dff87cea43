// File: src/core/stemmer.rs
use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};
use std::borrow::Cow;

/// Reduces a normalized word to its stem.
///
/// Implementations must be pure: the same word always yields the same stem.
pub trait Stemmer: Send + Sync {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// English Porter-family stemmer (Snowball "Porter2").
pub struct PorterStemmer {
    inner: SnowballStemmer,
}

impl PorterStemmer {
    pub fn new() -> Self {
        Self { inner: SnowballStemmer::create(Algorithm::English) }
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for PorterStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inner.stem(word)
    }
}

/// Leaves words untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn porter_reduces_inflections() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("connection"), "connect");
    }

    #[test]
    fn identity_is_a_no_op() {
        assert_eq!(IdentityStemmer.stem("running"), "running");
    }
}
