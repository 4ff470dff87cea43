// src/core/mod.rs

pub mod classifier;
pub mod model;
pub mod normalizer;
pub mod stemmer;
pub mod stopwords;
pub mod types;
