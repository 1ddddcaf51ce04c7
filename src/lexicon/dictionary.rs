//! Master dictionary loading.
//!
//! The master dictionary is a CSV file with one row per word and one column per
//! category. Category cells hold the year the word was added to the category
//! (negative years mark removals), so any strictly positive number sets the flag.
//!
//! Modal classes come either as a single `Modal` code column (1 = strong,
//! 2 = moderate, 3 = weak) or as separate `Strong_Modal`/`Moderate_Modal`/`Weak_Modal` columns.
use std::{fs::File, io::Read, path::Path};

use csv::StringRecord;
use log::{debug, info, warn};

use super::{LexiconEntry, WordMap};
use crate::error::Error;

const WORD: &str = "word";
const NEGATIVE: &str = "negative";
const POSITIVE: &str = "positive";
const UNCERTAINTY: &str = "uncertainty";
const LITIGIOUS: &str = "litigious";
const CONSTRAINING: &str = "constraining";
const SYLLABLES: &str = "syllables";
const MODAL: &str = "modal";
const STRONG_MODAL: &str = "strong_modal";
const MODERATE_MODAL: &str = "moderate_modal";
const WEAK_MODAL: &str = "weak_modal";

/// How modal classes are laid out in the header.
#[derive(Debug)]
enum ModalColumns {
    Code(usize),
    Flags {
        strong: Option<usize>,
        moderate: Option<usize>,
        weak: Option<usize>,
    },
}

/// Column positions resolved from the header row.
#[derive(Debug)]
struct Columns {
    word: usize,
    negative: usize,
    positive: usize,
    uncertainty: usize,
    litigious: usize,
    constraining: usize,
    syllables: usize,
    modal: ModalColumns,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, Error> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();
        let find = |name: &str| names.iter().position(|h| h == name);
        let require = |name: &str| find(name).ok_or_else(|| Error::MissingColumn(name.to_string()));

        let modal = match find(MODAL) {
            Some(idx) => ModalColumns::Code(idx),
            None => {
                let (strong, moderate, weak) =
                    (find(STRONG_MODAL), find(MODERATE_MODAL), find(WEAK_MODAL));
                if strong.is_none() && moderate.is_none() && weak.is_none() {
                    return Err(Error::MissingColumn(MODAL.to_string()));
                }
                ModalColumns::Flags {
                    strong,
                    moderate,
                    weak,
                }
            }
        };

        Ok(Self {
            word: require(WORD)?,
            negative: require(NEGATIVE)?,
            positive: require(POSITIVE)?,
            uncertainty: require(UNCERTAINTY)?,
            litigious: require(LITIGIOUS)?,
            constraining: require(CONSTRAINING)?,
            syllables: require(SYLLABLES)?,
            modal,
        })
    }
}

/// Parse a category cell. Empty cells are unset.
fn parse_flag(record: &StringRecord, idx: usize, row: usize) -> Result<bool, Error> {
    let cell = record.get(idx).unwrap_or_default().trim();
    if cell.is_empty() {
        return Ok(false);
    }
    cell.parse::<f64>()
        .map(|v| v > 0.0)
        .map_err(|_| Error::InvalidLexiconRow(row, format!("bad category value {:?}", cell)))
}

fn parse_optional_flag(record: &StringRecord, idx: Option<usize>, row: usize) -> Result<bool, Error> {
    match idx {
        Some(idx) => parse_flag(record, idx, row),
        None => Ok(false),
    }
}

fn parse_syllables(record: &StringRecord, idx: usize, row: usize) -> Result<u32, Error> {
    let cell = record.get(idx).unwrap_or_default().trim();
    if cell.is_empty() {
        return Ok(0);
    }
    cell.parse::<u32>()
        .map_err(|_| Error::InvalidLexiconRow(row, format!("bad syllable count {:?}", cell)))
}

/// Word → category flags, in source order.
#[derive(Debug, Default, Clone)]
pub struct MasterDictionary {
    words: Vec<String>,
    entries: WordMap<LexiconEntry>,
}

impl MasterDictionary {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        info!("loading master dictionary from {:?}", path);
        let f = File::open(path)?;
        Self::from_reader(f)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = Columns::from_headers(reader.headers()?)?;
        debug!("master dictionary columns: {:?}", columns);

        let mut dictionary = Self::default();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            // header is row 1
            let row = idx + 2;

            let word = record.get(columns.word).unwrap_or_default().trim();
            if word.is_empty() {
                continue;
            }

            let (strong_modal, moderate_modal, weak_modal) = match columns.modal {
                ModalColumns::Code(modal_idx) => {
                    let code = record.get(modal_idx).unwrap_or_default().trim();
                    match code {
                        "1" => (true, false, false),
                        "2" => (false, true, false),
                        "3" => (false, false, true),
                        _ => (false, false, false),
                    }
                }
                ModalColumns::Flags {
                    strong,
                    moderate,
                    weak,
                } => (
                    parse_optional_flag(&record, strong, row)?,
                    parse_optional_flag(&record, moderate, row)?,
                    parse_optional_flag(&record, weak, row)?,
                ),
            };

            let entry = LexiconEntry {
                positive: parse_flag(&record, columns.positive, row)?,
                negative: parse_flag(&record, columns.negative, row)?,
                uncertainty: parse_flag(&record, columns.uncertainty, row)?,
                litigious: parse_flag(&record, columns.litigious, row)?,
                constraining: parse_flag(&record, columns.constraining, row)?,
                weak_modal,
                moderate_modal,
                strong_modal,
                syllables: parse_syllables(&record, columns.syllables, row)?,
            };

            dictionary.insert(word, entry);
        }

        info!("master dictionary: {} words", dictionary.len());
        Ok(dictionary)
    }

    /// Insert (or replace) a word. A replaced word keeps its first-seen position.
    pub fn insert(&mut self, word: &str, entry: LexiconEntry) {
        let word = word.to_uppercase();
        if self.entries.insert(word.clone(), entry).is_some() {
            warn!("word {} appears more than once in master dictionary", word);
        } else {
            self.words.push(word);
        }
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    /// Iterate over words and entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LexiconEntry)> {
        self.words
            .iter()
            .filter_map(|w| self.entries.get(w).map(|e| (w.as_str(), e)))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, LexiconEntry)> for MasterDictionary {
    fn from_iter<I: IntoIterator<Item = (&'a str, LexiconEntry)>>(iter: I) -> Self {
        let mut dictionary = Self::default();
        for (word, entry) in iter {
            dictionary.insert(word, entry);
        }
        dictionary
    }
}
