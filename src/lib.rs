// src/lib.rs

pub mod batch;
pub mod config;
pub mod core;
pub mod error;
pub mod evaluate;
pub mod learning;
pub mod manifest;

pub use crate::core::classifier::Classifier;
pub use crate::core::model::Model;
pub use crate::core::normalizer::Normalizer;
pub use crate::error::{Result, TcError};
pub use crate::learning::Trainer;
