//! Sparse negative-term frequency vector.
use std::collections::BTreeMap;

/// Frequency vector of nominal length K, only storing nonzero counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermFrequencies {
    len: usize,
    counts: BTreeMap<usize, u32>,
}

impl TermFrequencies {
    pub fn with_len(len: usize) -> Self {
        Self {
            len,
            counts: BTreeMap::new(),
        }
    }

    /// Add one occurrence of `column`.
    ///
    /// # Panics
    /// if `column` is out of bounds.
    pub fn increment(&mut self, column: usize) {
        assert!(
            column < self.len,
            "column {} out of bounds (len {})",
            column,
            self.len
        );
        *self.counts.entry(column).or_insert(0) += 1;
    }

    pub fn get(&self, column: usize) -> u32 {
        self.counts.get(&column).copied().unwrap_or(0)
    }

    /// Nonzero (column, count) pairs by increasing column.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }

    /// Nominal length (K).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
