// File: src/evaluate.rs
//! Scores predictions against a gold labels file.

use crate::batch::Prediction;
use crate::error::{Result, TcError};
use crate::manifest::{parse_training, TrainingEntry};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;

/// Confusion counts for one label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassReport {
    pub true_positives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
}

impl ClassReport {
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    pub fn f1(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationReport {
    /// Predictions whose document appears in the gold file.
    pub judged: u64,
    pub correct: u64,
    /// Predictions with no gold label.
    pub unjudged: u64,
    pub per_class: BTreeMap<String, ClassReport>,
}

impl EvaluationReport {
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct, self.judged)
    }
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

pub fn read_gold(path: &str) -> Result<Vec<TrainingEntry>> {
    fs::read_to_string(path)
        .map(|text| parse_training(&text))
        .map_err(|source| TcError::GoldLabels { path: path.to_string(), source })
}

pub fn evaluate(predictions: &[Prediction], gold: &[TrainingEntry]) -> EvaluationReport {
    let truth: HashMap<&str, &str> = gold
        .iter()
        .map(|e| (e.document.as_str(), e.label.as_str()))
        .collect();

    let mut report = EvaluationReport::default();
    for prediction in predictions {
        let Some(&expected) = truth.get(prediction.document.as_str()) else {
            report.unjudged += 1;
            continue;
        };
        report.judged += 1;
        if expected == prediction.label {
            report.correct += 1;
            report.per_class.entry(expected.to_string()).or_default().true_positives += 1;
        } else {
            report.per_class.entry(expected.to_string()).or_default().false_negatives += 1;
            report.per_class.entry(prediction.label.clone()).or_default().false_positives += 1;
        }
    }
    report
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} CORRECT, {} INCORRECT, RATIO = {:.6}",
            self.correct,
            self.judged - self.correct,
            self.accuracy()
        )?;
        if self.unjudged > 0 {
            writeln!(f, "{} predictions had no gold label", self.unjudged)?;
        }
        writeln!(f, "{:<16} {:>9} {:>9} {:>9}", "label", "precision", "recall", "f1")?;
        for (label, class) in &self.per_class {
            writeln!(
                f,
                "{:<16} {:>9.4} {:>9.4} {:>9.4}",
                label,
                class.precision(),
                class.recall(),
                class.f1()
            )?;
        }
        Ok(())
    }
}
