//! Auxiliary negative word list (one word per line).
use std::{
    collections::HashSet,
    fs::File,
    hash::BuildHasherDefault,
    io::{BufRead, BufReader},
    path::Path,
};

use log::info;
use twox_hash::XxHash64;

use crate::error::Error;

#[derive(Debug, Default, Clone)]
pub struct NegativeWordList {
    words: HashSet<String, BuildHasherDefault<XxHash64>>,
}

impl NegativeWordList {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        info!("loading negative word list from {:?}", path);
        let f = File::open(path)?;
        let list = Self::from_reader(BufReader::new(f))?;
        info!("negative word list: {} words", list.len());
        Ok(list)
    }

    /// Read words line by line. Invalid UTF-8 is replaced rather than rejected.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut words = HashSet::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_uppercase());
            }
        }
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for NegativeWordList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.trim().to_uppercase()).collect(),
        }
    }
}
