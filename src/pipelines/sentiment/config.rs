//! Run parameters.
use std::path::PathBuf;

use crate::error::Error;

/// Parameters of a scoring run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreConfig {
    /// glob pattern matching corpus files (`**` recurses).
    pub corpus_pattern: String,
    pub lexicon_path: PathBuf,
    pub neg_wordlist_path: PathBuf,
    pub output_path: PathBuf,
    /// worker count. Defaults to available parallelism minus one.
    pub threads: Option<usize>,
}

impl ScoreConfig {
    pub fn new(
        corpus_pattern: String,
        lexicon_path: PathBuf,
        neg_wordlist_path: PathBuf,
        output_path: PathBuf,
    ) -> Self {
        Self {
            corpus_pattern,
            lexicon_path,
            neg_wordlist_path,
            output_path,
            threads: None,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Number of workers to use.
    pub fn workers(&self) -> Result<usize, Error> {
        match self.threads {
            Some(0) => Err(Error::Custom("worker count must be at least 1".to_string())),
            Some(n) => Ok(n),
            None => Ok(default_workers()),
        }
    }
}

/// Available parallelism minus one, keeping at least one worker.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .saturating_sub(1)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScoreConfig {
        ScoreConfig::new(
            "corpus/**/*.txt".to_string(),
            PathBuf::from("dict.csv"),
            PathBuf::from("neg.txt"),
            PathBuf::from("out.csv"),
        )
    }

    #[test]
    fn workers() {
        assert!(config().workers().unwrap() >= 1);
        assert_eq!(config().with_threads(3).workers().unwrap(), 3);
        assert!(config().with_threads(0).workers().is_err());
    }
}
