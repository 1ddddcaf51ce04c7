//! Corpus enumeration.
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::error::Error;

/// A corpus file and its discovery index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    index: usize,
    path: PathBuf,
}

impl CorpusEntry {
    pub fn new(index: usize, path: PathBuf) -> Self {
        Self { index, path }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Enumerates files matching a glob pattern.
///
/// Each call to [CorpusScanner::scan] restarts the enumeration from scratch.
/// Discovery indices are dense: entries that cannot be read, or that are not
/// regular files, are dropped before indexing.
/// Wildcards do not match hidden files and directories (leading `.`).
#[derive(Debug, Clone)]
pub struct CorpusScanner {
    pattern: String,
}

impl CorpusScanner {
    /// Fails if `pattern` is not a valid glob pattern.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        glob::Pattern::new(pattern)?;
        Ok(Self {
            pattern: pattern.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn scan(&self) -> Result<impl Iterator<Item = CorpusEntry>, Error> {
        debug!("scanning corpus with pattern {}", self.pattern);
        let options = glob::MatchOptions {
            require_literal_leading_dot: true,
            ..Default::default()
        };
        let entries = glob::glob_with(&self.pattern, options)?
            .filter_map(|entry| {
                entry.map_or_else(
                    |e| {
                        error!("error reading corpus entry: {}", e);
                        None
                    },
                    Some,
                )
            })
            .filter(|path| path.is_file())
            .enumerate()
            .map(|(index, path)| CorpusEntry::new(index, path));
        Ok(entries)
    }
}
