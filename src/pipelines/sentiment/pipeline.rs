//! Sentiment scoring pipeline
//!
//! # Processing
//! 1. The lexicon is loaded once. Failing to load it stops the run before any document is read.
//! 1. Corpus files are enumerated, each getting its discovery index.
//! 1. Documents are analyzed in parallel on a dedicated rayon pool, all workers sharing the lexicon.
//! 1. Results are placed in a slot array at their discovery index, skips are tallied.
//! 1. Valid documents go through the corpus-wide TF-IDF pass, in discovery order.
//! 1. The output table is written once, after aggregation.
use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;

use super::ScoreConfig;
use crate::aggregate::{CorpusAggregator, OutputRecord};
use crate::analysis::{Analyzer, DocumentStats, Skip};
use crate::corpus::{CorpusEntry, CorpusScanner};
use crate::error::Error;
use crate::io::{CsvWriter, WriterTrait};
use crate::lexicon::Lexicon;
use crate::pipelines::pipeline::Pipeline;

/// Number of progress lines logged over a run.
const PROGRESS_STEPS: usize = 20;

/// What a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// discovered documents.
    pub total: usize,
    /// documents present in the output.
    pub valid: usize,
    /// skipped documents, by [Skip::kind].
    pub skipped: BTreeMap<&'static str, usize>,
}

pub struct Sentiment {
    config: ScoreConfig,
}

impl Sentiment {
    pub fn new(config: ScoreConfig) -> Self {
        debug!("sentiment pipeline config: {:?}", config);
        Self { config }
    }

    /// Analyze every entry on a pool of `workers` threads.
    ///
    /// The returned vector has one slot per entry, at the entry's discovery index.
    /// Only this function writes into it, once every worker result is back.
    fn analyze_corpus(
        analyzer: &Analyzer,
        entries: &[CorpusEntry],
        workers: usize,
    ) -> Result<(Vec<Option<DocumentStats>>, BTreeMap<&'static str, usize>), Error> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|idx| format!("lexisent-worker-{}", idx))
            .build()?;
        info!("analyzing {} documents on {} workers", entries.len(), workers);

        let done = AtomicUsize::new(0);
        let step = (entries.len() / PROGRESS_STEPS).max(1);
        let results: Vec<(usize, Result<DocumentStats, Skip>)> = pool.install(|| {
            entries
                .par_iter()
                .map(|entry| {
                    let result = analyzer.analyze_isolated(entry);
                    let done = done.fetch_add(1, Ordering::Relaxed) + 1;
                    if done % step == 0 {
                        info!("processed {}/{} documents", done, entries.len());
                    }
                    (entry.index(), result)
                })
                .collect()
        });

        let mut slots: Vec<Option<DocumentStats>> = (0..entries.len()).map(|_| None).collect();
        let mut skipped = BTreeMap::new();
        for (index, result) in results {
            match result {
                Ok(doc) => {
                    let slot = &mut slots[index];
                    if slot.is_some() {
                        return Err(Error::Custom(format!(
                            "discovery index {} produced twice",
                            index
                        )));
                    }
                    *slot = Some(doc);
                }
                Err(skip) => *skipped.entry(skip.kind()).or_insert(0) += 1,
            }
        }

        Ok((slots, skipped))
    }
}

impl Pipeline<RunSummary> for Sentiment {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn run(&self) -> Result<RunSummary, Error> {
        let workers = self.config.workers()?;
        let lexicon = Arc::new(Lexicon::from_paths(
            &self.config.lexicon_path,
            &self.config.neg_wordlist_path,
        )?);
        let terms = lexicon.negative_index().len();
        let analyzer = Analyzer::new(lexicon);

        let scanner = CorpusScanner::new(&self.config.corpus_pattern)?;
        let entries: Vec<CorpusEntry> = scanner.scan()?.collect();
        let total = entries.len();
        info!("found {} documents matching {}", total, scanner.pattern());

        let (slots, skipped) = Self::analyze_corpus(&analyzer, &entries, workers)?;

        let valid = slots.iter().filter(|slot| slot.is_some()).count();
        info!("Processed : {}/{}", valid, total);
        if !skipped.is_empty() {
            info!(
                "skipped: {}",
                skipped
                    .iter()
                    .map(|(kind, count)| format!("{} ({})", kind, count))
                    .join(", ")
            );
        }

        let mut aggregator = CorpusAggregator::new(total, terms, valid);
        for doc in slots.into_iter().flatten() {
            aggregator.push(doc);
        }
        let records = aggregator.finish();

        let mut writer: CsvWriter<OutputRecord> =
            CsvWriter::new(&self.config.output_path, &OutputRecord::HEADER)?;
        writer.write(records)?;
        writer.commit()?;

        Ok(RunSummary {
            total,
            valid,
            skipped,
        })
    }
}
