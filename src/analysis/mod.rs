/*! Per-document analysis

A document is upper-cased, stripped of the word "may", tokenized on ASCII
alphabetic words of at least two letters, and scored against the [crate::lexicon::Lexicon].

Documents that cannot be scored produce a [Skip] rather than an error:
skips never stop a run.
!*/
mod analyzer;
mod frequencies;
mod stats;

use std::fmt;

pub use analyzer::Analyzer;
pub use frequencies::TermFrequencies;
pub use stats::{safe_divide, CategoryCounts, DocumentStats, TextStats};

use crate::corpus::FilenameError;

/// Reason a document was left out of the results.
#[derive(Debug)]
pub enum Skip {
    /// No token left after normalization.
    NoTokens,
    MalformedFilename(FilenameError),
    Unreadable(std::io::Error),
    /// Unexpected failure (panic) during analysis.
    Fault(String),
}

impl Skip {
    /// Short, stable label used in run summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Skip::NoTokens => "no tokens",
            Skip::MalformedFilename(_) => "malformed filename",
            Skip::Unreadable(_) => "unreadable",
            Skip::Fault(_) => "fault",
        }
    }
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::NoTokens => write!(f, "no valid tokens"),
            Skip::MalformedFilename(e) => write!(f, "{}", e),
            Skip::Unreadable(e) => write!(f, "could not read file: {}", e),
            Skip::Fault(cause) => write!(f, "analysis failed: {}", cause),
        }
    }
}
