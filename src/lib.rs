//! # lexisent
//!
//! Lexicon-based sentiment and readability statistics for filing corpora,
//! with corpus-wide TF-IDF weights of negative terms.
//!
//! Each document is scored against a master dictionary (positive, negative,
//! uncertainty, litigious, constraining and modal categories) and an auxiliary
//! negative word list. Once every document has been scored, negative-term
//! frequencies are weighted by their inverse document frequency over the corpus.
pub mod aggregate;
pub mod analysis;
pub mod corpus;
pub mod error;
pub mod io;
pub mod lexicon;
pub mod pipelines;
