//! Output table row.
use serde::Serialize;

use crate::analysis::DocumentStats;

/// One row of the output table. Field order is column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    pub filename: String,
    pub file_size: u64,
    pub num_words: u64,
    pub pct_positive: f64,
    pub pct_negative: f64,
    pub pct_uncertainty: f64,
    pub pct_litigious: f64,
    pub pct_modal_weak: f64,
    pub pct_modal_moderate: f64,
    pub pct_modal_strong: f64,
    pub pct_constraining: f64,
    pub num_alphanum: u64,
    pub num_digits: u64,
    pub num_numbers: u64,
    pub avg_syllables: f64,
    pub avg_word_length: f64,
    pub vocabulary: usize,
    #[serde(rename = "CIK")]
    pub cik: String,
    #[serde(rename = "H4N-INF_pct")]
    pub h4n_inf_pct: f64,
    #[serde(rename = "FIN-NEG_pct")]
    pub fin_neg_pct: f64,
    #[serde(rename = "TF-IDF")]
    pub tfidf: f64,
    #[serde(rename = "Term_Weight")]
    pub term_weight: f64,
}

impl OutputRecord {
    /// Column names, in order.
    pub const HEADER: [&'static str; 22] = [
        "filename",
        "file_size",
        "num_words",
        "pct_positive",
        "pct_negative",
        "pct_uncertainty",
        "pct_litigious",
        "pct_modal_weak",
        "pct_modal_moderate",
        "pct_modal_strong",
        "pct_constraining",
        "num_alphanum",
        "num_digits",
        "num_numbers",
        "avg_syllables",
        "avg_word_length",
        "vocabulary",
        "CIK",
        "H4N-INF_pct",
        "FIN-NEG_pct",
        "TF-IDF",
        "Term_Weight",
    ];

    /// Build a row from document statistics and its TF-IDF summaries.
    pub fn new(doc: &DocumentStats, tfidf: f64, term_weight: f64) -> Self {
        let text = &doc.text;
        let c = &text.categories;
        Self {
            filename: doc.file_name.clone(),
            file_size: doc.file_size,
            num_words: text.tokens,
            pct_positive: text.pct(c.positive),
            pct_negative: text.pct(c.negative),
            pct_uncertainty: text.pct(c.uncertainty),
            pct_litigious: text.pct(c.litigious),
            pct_modal_weak: text.pct(c.weak_modal),
            pct_modal_moderate: text.pct(c.moderate_modal),
            pct_modal_strong: text.pct(c.strong_modal),
            pct_constraining: text.pct(c.constraining),
            num_alphanum: text.alphanumeric,
            num_digits: text.digits,
            num_numbers: text.numbers,
            avg_syllables: text.avg_syllables(),
            avg_word_length: text.avg_token_length(),
            vocabulary: text.vocabulary,
            cik: doc.filer_id.to_string(),
            h4n_inf_pct: text.pct(text.auxiliary_negative),
            fin_neg_pct: text.pct(c.negative),
            tfidf,
            term_weight,
        }
    }
}
