/*! Corpus access

Enumerates corpus files ([CorpusScanner]) and extracts the filer identifier
embedded in their names ([FilerId]).
!*/
mod filename;
mod scanner;

pub use filename::{FilenameError, FilerId};
pub use scanner::{CorpusEntry, CorpusScanner};
