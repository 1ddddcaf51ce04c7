//! Sparse document × term matrices.
//!
//! Both the frequency matrix and the TF-IDF matrix use a compressed sparse row
//! layout: row `r` owns `indices[indptr[r]..indptr[r + 1]]` (columns, increasing)
//! and the values at the same positions.
use crate::analysis::{safe_divide, TermFrequencies};

/// Added to every document frequency.
pub const DF_SMOOTHING: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
struct Csr<T> {
    cols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: Copy> Csr<T> {
    fn new(cols: usize, rows_hint: usize) -> Self {
        let mut indptr = Vec::with_capacity(rows_hint + 1);
        indptr.push(0);
        Self {
            cols,
            indptr,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    fn rows(&self) -> usize {
        self.indptr.len() - 1
    }

    fn push_row<I: IntoIterator<Item = (usize, T)>>(&mut self, row: I) {
        for (col, value) in row {
            self.indices.push(col);
            self.values.push(value);
        }
        self.indptr.push(self.indices.len());
    }

    fn row(&self, r: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        let range = self.indptr[r]..self.indptr[r + 1];
        self.indices[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }

    fn get(&self, r: usize, c: usize) -> Option<T> {
        let range = self.indptr[r]..self.indptr[r + 1];
        self.indices[range.clone()]
            .binary_search(&c)
            .ok()
            .map(|pos| self.values[range.start + pos])
    }
}

/// Raw term frequencies of the valid documents, with their token counts.
#[derive(Debug, Clone, PartialEq)]
pub struct TermMatrix {
    counts: Csr<u32>,
    doc_lengths: Vec<u64>,
}

impl TermMatrix {
    pub fn new(terms: usize, rows_hint: usize) -> Self {
        Self {
            counts: Csr::new(terms, rows_hint),
            doc_lengths: Vec::with_capacity(rows_hint),
        }
    }

    /// Append a document row.
    ///
    /// # Panics
    /// if `frequencies` does not have one column per term.
    pub fn push(&mut self, frequencies: &TermFrequencies, doc_length: u64) {
        assert_eq!(
            frequencies.len(),
            self.counts.cols,
            "frequency vector length does not match term count"
        );
        self.counts.push_row(frequencies.iter());
        self.doc_lengths.push(doc_length);
    }

    pub fn rows(&self) -> usize {
        self.counts.rows()
    }

    pub fn terms(&self) -> usize {
        self.counts.cols
    }

    pub fn get(&self, row: usize, term: usize) -> u32 {
        self.counts.get(row, term).unwrap_or(0)
    }

    /// Number of documents with a nonzero count for each term, plus [DF_SMOOTHING].
    pub fn document_frequency(&self) -> Vec<f64> {
        let mut df = vec![DF_SMOOTHING; self.terms()];
        for &col in &self.counts.indices {
            df[col] += 1.0;
        }
        df
    }

    /// `ln(total_documents / df)`, floored at 0.
    ///
    /// `total_documents` is the number of *discovered* documents, skipped ones included.
    pub fn inverse_document_frequency(&self, total_documents: usize) -> Vec<f64> {
        self.document_frequency()
            .into_iter()
            .map(|df| (total_documents as f64 / df).ln().max(0.0))
            .collect()
    }

    /// Weight every count by `idf`, after normalizing by document length.
    pub fn tfidf(&self, idf: &[f64]) -> TfIdfMatrix {
        assert_eq!(idf.len(), self.terms(), "idf length does not match term count");
        let mut weights = Csr::new(self.terms(), self.rows());
        for (r, &len) in self.doc_lengths.iter().enumerate() {
            let row: Vec<(usize, f64)> = self
                .counts
                .row(r)
                .map(|(c, n)| (c, safe_divide(f64::from(n), len as f64) * idf[c]))
                .collect();
            weights.push_row(row);
        }
        TfIdfMatrix { weights }
    }
}

/// TF-IDF weights, same shape as the [TermMatrix] they come from.
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfMatrix {
    weights: Csr<f64>,
}

impl TfIdfMatrix {
    pub fn rows(&self) -> usize {
        self.weights.rows()
    }

    pub fn terms(&self) -> usize {
        self.weights.cols
    }

    pub fn get(&self, row: usize, term: usize) -> f64 {
        self.weights.get(row, term).unwrap_or(0.0)
    }

    /// Nonzero weights of a row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.weights.row(row)
    }

    /// Sum of a row's weights.
    pub fn term_weight(&self, row: usize) -> f64 {
        self.row(row).map(|(_, w)| w).sum()
    }

    /// Mean weight of a row over all terms (zeros included).
    pub fn mean(&self, row: usize) -> f64 {
        safe_divide(self.term_weight(row), self.terms() as f64)
    }
}
