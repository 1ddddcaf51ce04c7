/*! Lexicon loading

A [Lexicon] bundles the three read-only structures every worker needs:
- the master dictionary (word → categories, syllables),
- the [NegativeWordIndex], giving each negative word a fixed TF-IDF column,
- the auxiliary [NegativeWordList].

It is built once per run and shared behind an [std::sync::Arc].
!*/
mod dictionary;
mod wordlist;

use std::{collections::HashMap, hash::BuildHasherDefault, path::Path};

use log::info;
use twox_hash::XxHash64;

use crate::error::Error;

pub use dictionary::MasterDictionary;
pub use wordlist::NegativeWordList;

pub(crate) type WordMap<V> = HashMap<String, V, BuildHasherDefault<XxHash64>>;

/// Category membership and syllable count of a single word.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub positive: bool,
    pub negative: bool,
    pub uncertainty: bool,
    pub litigious: bool,
    pub constraining: bool,
    pub weak_modal: bool,
    pub moderate_modal: bool,
    pub strong_modal: bool,
    pub syllables: u32,
}

/// Maps every negative word of the master dictionary to a column in `0..K`.
///
/// Columns follow the order in which words appear in the dictionary.
#[derive(Debug, Default, Clone)]
pub struct NegativeWordIndex {
    terms: Vec<String>,
    columns: WordMap<usize>,
}

impl NegativeWordIndex {
    pub fn from_dictionary(dictionary: &MasterDictionary) -> Self {
        let terms: Vec<String> = dictionary
            .iter()
            .filter(|(_, entry)| entry.negative)
            .map(|(word, _)| word.to_string())
            .collect();
        let columns = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        Self { terms, columns }
    }

    /// Column of `word`, if it is a negative term.
    #[inline]
    pub fn column(&self, word: &str) -> Option<usize> {
        self.columns.get(word).copied()
    }

    /// Term held by `column`.
    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get(column).map(String::as_str)
    }

    /// Number of columns (K).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Immutable scoring state shared by all workers.
#[derive(Debug, Clone)]
pub struct Lexicon {
    dictionary: MasterDictionary,
    negative_index: NegativeWordIndex,
    auxiliary_negative: NegativeWordList,
}

impl Lexicon {
    pub fn new(dictionary: MasterDictionary, auxiliary_negative: NegativeWordList) -> Self {
        let negative_index = NegativeWordIndex::from_dictionary(&dictionary);
        Self {
            dictionary,
            negative_index,
            auxiliary_negative,
        }
    }

    /// Load both sources. Any failure here is fatal for the run.
    pub fn from_paths(dictionary: &Path, negative_wordlist: &Path) -> Result<Self, Error> {
        let lexicon = Self::new(
            MasterDictionary::from_path(dictionary)?,
            NegativeWordList::from_path(negative_wordlist)?,
        );
        info!(
            "lexicon ready: {} words, {} negative terms, {} auxiliary negative words",
            lexicon.dictionary.len(),
            lexicon.negative_index.len(),
            lexicon.auxiliary_negative.len()
        );
        Ok(lexicon)
    }

    #[inline]
    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.dictionary.get(word)
    }

    pub fn negative_index(&self) -> &NegativeWordIndex {
        &self.negative_index
    }

    #[inline]
    pub fn is_auxiliary_negative(&self, word: &str) -> bool {
        self.auxiliary_negative.contains(word)
    }
}

#[cfg(test)]
impl Lexicon {
    /// Keep only the first `len` negative terms, while the dictionary and the
    /// term to column map still know the others.
    pub(crate) fn with_truncated_index(mut self, len: usize) -> Self {
        self.negative_index.terms.truncate(len);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn negative() -> LexiconEntry {
        LexiconEntry {
            negative: true,
            ..Default::default()
        }
    }

    #[test]
    fn negative_index_is_dense() {
        let dictionary: MasterDictionary = vec![
            ("LOSS", negative()),
            ("GAIN", LexiconEntry::default()),
            ("DEFAULT", negative()),
            ("IMPAIRMENT", negative()),
        ]
        .into_iter()
        .collect();

        let idx = NegativeWordIndex::from_dictionary(&dictionary);
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.column("LOSS"), Some(0));
        assert_eq!(idx.column("DEFAULT"), Some(1));
        assert_eq!(idx.column("IMPAIRMENT"), Some(2));
        assert_eq!(idx.column("GAIN"), None);
        for col in 0..idx.len() {
            let term = idx.term(col).unwrap();
            assert_eq!(idx.column(term), Some(col));
        }
    }

    #[test]
    fn from_paths() {
        let dir = tempfile::tempdir().unwrap();
        let dict_path = dir.path().join("dict.csv");
        let neg_path = dir.path().join("neg.txt");

        let mut f = std::fs::File::create(&dict_path).unwrap();
        writeln!(
            f,
            "Word,Negative,Positive,Uncertainty,Litigious,Constraining,Modal,Syllables"
        )
        .unwrap();
        writeln!(f, "LOSS,2009,0,0,0,0,0,1").unwrap();
        writeln!(f, "GOOD,0,2009,0,0,0,0,1").unwrap();
        std::fs::write(&neg_path, "decline\n").unwrap();

        let lexicon = Lexicon::from_paths(&dict_path, &neg_path).unwrap();
        assert!(lexicon.get("GOOD").unwrap().positive);
        assert_eq!(lexicon.negative_index().len(), 1);
        assert!(lexicon.is_auxiliary_negative("DECLINE"));
    }

    #[test]
    fn missing_source_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let res = Lexicon::from_paths(&dir.path().join("nope.csv"), &dir.path().join("nope.txt"));
        assert!(matches!(res, Err(Error::Io(_))));
    }
}
