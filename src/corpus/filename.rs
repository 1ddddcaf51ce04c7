//! Filer identifier extraction.
//!
//! Corpus files are named `<date>_<form>_<...>_<identifier>_<seq>.txt`, the
//! identifier segment itself being `<cik>-<accession parts>`.
use std::{fmt, path::Path};

const SEGMENT_DELIMITER: char = '_';
const IDENTIFIER_DELIMITER: char = '-';
const MIN_SEGMENTS: usize = 5;
const IDENTIFIER_SEGMENT: usize = 4;
const IDENTIFIER_WIDTH: usize = 10;
const EXTENSION: &str = ".txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameError {
    NotUnicode,
    TooFewSegments { found: usize, required: usize },
    InvalidIdentifier(String),
}

impl fmt::Display for FilenameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilenameError::NotUnicode => write!(f, "file name is not valid unicode"),
            FilenameError::TooFewSegments { found, required } => write!(
                f,
                "file name has {} segments, at least {} required",
                found, required
            ),
            FilenameError::InvalidIdentifier(id) => write!(f, "invalid filer identifier {:?}", id),
        }
    }
}

/// Zero-padded, fixed-width filer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilerId(String);

impl FilerId {
    /// Normalize a raw numeric identifier to [IDENTIFIER_WIDTH] characters.
    pub fn parse(raw: &str) -> Result<Self, FilenameError> {
        let raw = raw.trim();
        if raw.is_empty() || raw.len() > IDENTIFIER_WIDTH || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FilenameError::InvalidIdentifier(raw.to_string()));
        }
        Ok(Self(format!("{:0>width$}", raw, width = IDENTIFIER_WIDTH)))
    }

    /// Extract the identifier from a file name (not a full path).
    pub fn from_file_name(file_name: &str) -> Result<Self, FilenameError> {
        let stem = file_name.strip_suffix(EXTENSION).unwrap_or(file_name);
        let segments: Vec<&str> = stem.split(SEGMENT_DELIMITER).collect();
        if segments.len() < MIN_SEGMENTS {
            return Err(FilenameError::TooFewSegments {
                found: segments.len(),
                required: MIN_SEGMENTS,
            });
        }

        let raw = segments[IDENTIFIER_SEGMENT]
            .split(IDENTIFIER_DELIMITER)
            .next()
            .unwrap_or_default();
        Self::parse(raw)
    }

    pub fn from_path(path: &Path) -> Result<Self, FilenameError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(FilenameError::NotUnicode)?;
        Self::from_file_name(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn edgar_file_name() {
        let id = FilerId::from_file_name("20200302_10-K_edgar_data_320193_0000320193-20-000010_1.txt")
            .unwrap();
        assert_eq!(id.as_str(), "0000320193");
    }

    #[test]
    fn hyphenated_identifier_segment() {
        let id = FilerId::from_file_name("20200302_10-K_edgar_data_1750-0001_1.txt").unwrap();
        assert_eq!(id.as_str(), "0000001750");
    }

    #[test]
    fn too_few_segments() {
        assert_eq!(
            FilerId::from_file_name("20200302_10-K_edgar.txt"),
            Err(FilenameError::TooFewSegments {
                found: 3,
                required: 5
            })
        );
    }

    #[test]
    fn extension_is_not_a_character_set() {
        // only the literal extension is removed, trailing 't's are kept
        let id = FilerId::from_file_name("a_b_c_d_77_seqt.txt").unwrap();
        assert_eq!(id.as_str(), "0000000077");
    }

    #[test]
    fn non_numeric_identifier() {
        assert!(matches!(
            FilerId::from_file_name("a_b_c_d_apple_1.txt"),
            Err(FilenameError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            FilerId::from_file_name("a_b_c_d_12345678901_1.txt"),
            Err(FilenameError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn from_path_uses_file_name() {
        let p = PathBuf::from("QTR1/2020_Q1/20200102_8-K_edgar_data_1000045_0001_1.txt");
        assert_eq!(FilerId::from_path(&p).unwrap().to_string(), "0001000045");
    }
}
