// src/core/types.rs

/// Stable position of a class in every per-term count vector and score vector.
pub type ClassIndex = usize;

/// Occurrence counts of each term, one slot per class.
/// Slots start at 1 (add-one smoothing), so a slot is never zero.
pub type CountVector = Vec<u64>;

/// Aggregate statistics kept for each label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassStats {
    pub index: ClassIndex,
    /// Training documents listed with this label, readable or not.
    pub document_count: u64,
    /// Non-discarded tokens seen across this label's documents.
    /// Excludes the smoothing mass.
    pub token_count: u64,
}

impl ClassStats {
    pub fn new(index: ClassIndex) -> Self {
        Self { index, document_count: 0, token_count: 0 }
    }
}
