//! Lexicon scoring of a single document.
use std::{
    collections::HashSet,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use lazy_static::lazy_static;
use log::{debug, error};
use regex::Regex;

use super::{CategoryCounts, DocumentStats, Skip, TermFrequencies, TextStats};
use crate::corpus::{CorpusEntry, FilerId};
use crate::lexicon::Lexicon;

lazy_static! {
    /// "may" is both a modal and a month, and is removed before tokenizing.
    static ref MAY: Regex = Regex::new(r"(?i)\bmay\b").unwrap();
    static ref TOKEN: Regex = Regex::new(r"\b[A-Za-z]{2,}\b").unwrap();
    static ref NUMBER: Regex = Regex::new(r"\b\d+\b").unwrap();
    static ref DIGIT: Regex = Regex::new(r"\d").unwrap();
}

/// Scores documents against a shared [Lexicon].
#[derive(Debug, Clone)]
pub struct Analyzer {
    lexicon: Arc<Lexicon>,
}

impl Analyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Score raw text.
    ///
    /// Returns [Skip::NoTokens] if no token survives normalization.
    pub fn analyze_text(&self, text: &str) -> Result<TextStats, Skip> {
        let doc = MAY.replace_all(text, " ").to_uppercase();

        let negative_index = self.lexicon.negative_index();
        let mut categories = CategoryCounts::default();
        let mut frequencies = TermFrequencies::with_len(negative_index.len());
        let mut vocabulary = HashSet::new();
        let mut tokens = 0u64;
        let mut syllables = 0u64;
        let mut token_chars = 0u64;
        let mut auxiliary_negative = 0u64;

        for token in TOKEN.find_iter(&doc).map(|m| m.as_str()) {
            tokens += 1;
            token_chars += token.len() as u64;

            if let Some(entry) = self.lexicon.get(token) {
                categories.add(entry);
                syllables += u64::from(entry.syllables);
                vocabulary.insert(token);

                if let Some(column) = negative_index.column(token) {
                    frequencies.increment(column);
                }
            }

            if self.lexicon.is_auxiliary_negative(token) {
                auxiliary_negative += 1;
            }
        }

        if tokens == 0 {
            return Err(Skip::NoTokens);
        }

        Ok(TextStats {
            tokens,
            categories,
            syllables,
            token_chars,
            vocabulary: vocabulary.len(),
            auxiliary_negative,
            alphanumeric: doc.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64,
            digits: DIGIT.find_iter(&doc).count() as u64,
            numbers: NUMBER.find_iter(&doc).count() as u64,
            frequencies,
        })
    }

    /// Score a corpus file.
    ///
    /// The file name is checked before the file is read.
    pub fn analyze(&self, entry: &CorpusEntry) -> Result<DocumentStats, Skip> {
        let path = entry.path();
        let filer_id = FilerId::from_path(path).map_err(Skip::MalformedFilename)?;

        let content = std::fs::read(path).map_err(Skip::Unreadable)?;
        let text = String::from_utf8_lossy(&content);
        let stats = self.analyze_text(&text)?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(DocumentStats {
            index: entry.index(),
            file_name,
            file_size: content.len() as u64,
            filer_id,
            text: stats,
        })
    }

    /// [Analyzer::analyze], turning panics into [Skip::Fault].
    ///
    /// Skips are logged here, so that callers only have to tally them.
    pub fn analyze_isolated(&self, entry: &CorpusEntry) -> Result<DocumentStats, Skip> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.analyze(entry)))
            .unwrap_or_else(|payload| {
                let cause = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                Err(Skip::Fault(cause))
            });

        match &result {
            Ok(_) => (),
            Err(e @ Skip::Fault(_)) | Err(e @ Skip::Unreadable(_)) => {
                error!("Error processing {:?}: {}", entry.path(), e)
            }
            Err(e) => debug!("skipping {:?}: {}", entry.path(), e),
        }

        result
    }
}
