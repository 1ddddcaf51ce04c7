/*! Corpus-wide aggregation

IDF depends on every document, so aggregation only starts once all documents
have been analyzed: valid documents are pushed in discovery order into a
[CorpusAggregator], which then builds the TF-IDF matrix and the output rows.
!*/
mod matrix;
mod record;

use log::{debug, warn};

pub use matrix::{TermMatrix, TfIdfMatrix, DF_SMOOTHING};
pub use record::OutputRecord;

use crate::analysis::DocumentStats;

/// Collects valid documents and computes their TF-IDF summaries.
#[derive(Debug)]
pub struct CorpusAggregator {
    total_documents: usize,
    documents: Vec<DocumentStats>,
    matrix: TermMatrix,
}

impl CorpusAggregator {
    /// `total_documents` counts every discovered document, skipped ones included.
    pub fn new(total_documents: usize, terms: usize, capacity: usize) -> Self {
        Self {
            total_documents,
            documents: Vec::with_capacity(capacity),
            matrix: TermMatrix::new(terms, capacity),
        }
    }

    /// Add a valid document.
    ///
    /// # Panics
    /// if documents are not pushed in increasing discovery order.
    pub fn push(&mut self, doc: DocumentStats) {
        if let Some(last) = self.documents.last() {
            assert!(
                last.index < doc.index,
                "document {} pushed after document {}",
                doc.index,
                last.index
            );
        }
        self.matrix.push(&doc.text.frequencies, doc.text.tokens);
        self.documents.push(doc);
    }

    pub fn matrix(&self) -> &TermMatrix {
        &self.matrix
    }

    /// Compute IDF/TF-IDF and produce one row per valid document, in discovery order.
    pub fn finish(self) -> Vec<OutputRecord> {
        if self.documents.is_empty() {
            warn!(
                "no valid documents out of {} discovered, output will only hold a header",
                self.total_documents
            );
            return Vec::new();
        }

        let idf = self.matrix.inverse_document_frequency(self.total_documents);
        debug!(
            "idf computed over {} terms ({} valid / {} total documents)",
            idf.len(),
            self.documents.len(),
            self.total_documents
        );
        let tfidf = self.matrix.tfidf(&idf);

        self.documents
            .iter()
            .enumerate()
            .map(|(row, doc)| OutputRecord::new(doc, tfidf.mean(row), tfidf.term_weight(row)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{CategoryCounts, TermFrequencies, TextStats};
    use crate::corpus::FilerId;

    fn doc(index: usize, tokens: u64, counts: &[(usize, u32)]) -> DocumentStats {
        let mut frequencies = TermFrequencies::with_len(2);
        for &(c, n) in counts {
            for _ in 0..n {
                frequencies.increment(c);
            }
        }
        DocumentStats {
            index,
            file_name: format!("{}.txt", index),
            file_size: 0,
            filer_id: FilerId::parse("1").unwrap(),
            text: TextStats {
                tokens,
                categories: CategoryCounts {
                    negative: counts.iter().map(|(_, n)| u64::from(*n)).sum(),
                    ..Default::default()
                },
                syllables: 0,
                token_chars: 0,
                vocabulary: counts.len(),
                auxiliary_negative: 0,
                alphanumeric: 0,
                digits: 0,
                numbers: 0,
                frequencies,
            },
        }
    }

    #[test]
    fn term_in_one_document() {
        // term 0 plays "LITIGATION": only in the first document
        let mut agg = CorpusAggregator::new(2, 2, 2);
        agg.push(doc(0, 4, &[(0, 1)]));
        agg.push(doc(1, 5, &[(1, 1)]));

        let records = agg.finish();
        assert_eq!(records.len(), 2);
        let idf = (2.0f64 / (1.0 + DF_SMOOTHING)).ln();
        assert!((records[0].term_weight - 0.25 * idf).abs() < 1e-12);
        assert!((records[0].tfidf - 0.25 * idf / 2.0).abs() < 1e-12);
        assert!((records[1].term_weight - 0.2 * idf).abs() < 1e-12);
        assert_eq!(records[0].filename, "0.txt");
        assert_eq!(records[1].filename, "1.txt");
    }

    #[test]
    fn empty_corpus() {
        let agg = CorpusAggregator::new(3, 2, 0);
        assert!(agg.finish().is_empty());
    }

    #[test]
    #[should_panic]
    fn out_of_order_push() {
        let mut agg = CorpusAggregator::new(2, 2, 2);
        agg.push(doc(1, 1, &[]));
        agg.push(doc(0, 1, &[]));
    }

    #[test]
    fn percentages() {
        let mut agg = CorpusAggregator::new(1, 2, 1);
        agg.push(doc(0, 8, &[(0, 1), (1, 1)]));
        let records = agg.finish();
        assert_eq!(records[0].pct_negative, 2.0 / 8.0 * 100.0);
        assert_eq!(records[0].fin_neg_pct, records[0].pct_negative);
        assert_eq!(records[0].pct_positive, 0.0);
        assert_eq!(records[0].cik, "0000000001");
    }
}
