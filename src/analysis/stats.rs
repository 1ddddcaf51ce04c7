//! Per-document statistics.
use super::TermFrequencies;
use crate::corpus::FilerId;
use crate::lexicon::LexiconEntry;

/// `a / b`, or 0 when `b` is 0.
#[inline]
pub fn safe_divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

/// Number of tokens falling in each category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCounts {
    pub positive: u64,
    pub negative: u64,
    pub uncertainty: u64,
    pub litigious: u64,
    pub constraining: u64,
    pub weak_modal: u64,
    pub moderate_modal: u64,
    pub strong_modal: u64,
}

impl CategoryCounts {
    /// Count one occurrence of a word in each of its categories.
    pub fn add(&mut self, entry: &LexiconEntry) {
        self.positive += u64::from(entry.positive);
        self.negative += u64::from(entry.negative);
        self.uncertainty += u64::from(entry.uncertainty);
        self.litigious += u64::from(entry.litigious);
        self.constraining += u64::from(entry.constraining);
        self.weak_modal += u64::from(entry.weak_modal);
        self.moderate_modal += u64::from(entry.moderate_modal);
        self.strong_modal += u64::from(entry.strong_modal);
    }
}

/// Statistics derived from the text of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStats {
    pub tokens: u64,
    pub categories: CategoryCounts,
    pub syllables: u64,
    /// total length of tokens, in characters.
    pub token_chars: u64,
    pub vocabulary: usize,
    pub auxiliary_negative: u64,
    pub alphanumeric: u64,
    pub digits: u64,
    pub numbers: u64,
    pub frequencies: TermFrequencies,
}

impl TextStats {
    /// `count` as a percentage of tokens.
    #[inline]
    pub fn pct(&self, count: u64) -> f64 {
        safe_divide(count as f64, self.tokens as f64) * 100.0
    }

    pub fn avg_syllables(&self) -> f64 {
        safe_divide(self.syllables as f64, self.tokens as f64)
    }

    pub fn avg_token_length(&self) -> f64 {
        safe_divide(self.token_chars as f64, self.tokens as f64)
    }
}

/// Scored document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentStats {
    pub index: usize,
    pub file_name: String,
    pub file_size: u64,
    pub filer_id: FilerId,
    pub text: TextStats,
}
