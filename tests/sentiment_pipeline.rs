use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lexisent::aggregate::{CorpusAggregator, OutputRecord, DF_SMOOTHING};
use lexisent::analysis::Analyzer;
use lexisent::corpus::{CorpusEntry, CorpusScanner};
use lexisent::error::Error;
use lexisent::lexicon::Lexicon;
use lexisent::pipelines::{Pipeline, ScoreConfig, Sentiment};
use tempfile::TempDir;

const DICTIONARY: &str = "Word,Negative,Positive,Uncertainty,Litigious,Constraining,Modal,Syllables
GOOD,0,2009,0,0,0,0,1
LOSS,2009,0,0,0,0,0,1
LITIGATION,2009,0,0,2009,0,0,4
MIGHT,0,0,2009,0,0,3,1
MUST,0,0,0,0,2009,1,1
";

const NEGATIVE_WORDS: &str = "decline\nloss\n";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(documents: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dict.csv"), DICTIONARY).unwrap();
        std::fs::write(dir.path().join("neg.txt"), NEGATIVE_WORDS).unwrap();

        let corpus = dir.path().join("corpus").join("QTR1");
        std::fs::create_dir_all(&corpus).unwrap();
        for (name, content) in documents {
            std::fs::write(corpus.join(name), content).unwrap();
        }
        Self { dir }
    }

    fn pattern(&self) -> String {
        format!("{}/corpus/**/*.txt", self.dir.path().display())
    }

    fn output(&self) -> PathBuf {
        self.dir.path().join("results.csv")
    }

    fn config(&self) -> ScoreConfig {
        ScoreConfig::new(
            self.pattern(),
            self.dir.path().join("dict.csv"),
            self.dir.path().join("neg.txt"),
            self.output(),
        )
        .with_threads(2)
    }

    fn lexicon(&self) -> Arc<Lexicon> {
        Arc::new(
            Lexicon::from_paths(
                &self.dir.path().join("dict.csv"),
                &self.dir.path().join("neg.txt"),
            )
            .unwrap(),
        )
    }
}

fn read_output(path: &Path) -> (Vec<String>, Vec<HashMap<String, String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    let rows = reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            header
                .iter()
                .cloned()
                .zip(r.iter().map(String::from))
                .collect()
        })
        .collect();
    (header, rows)
}

fn float(row: &HashMap<String, String>, column: &str) -> f64 {
    row[column].parse().unwrap()
}

fn mixed_corpus() -> Fixture {
    Fixture::new(&[
        ("20200101_10-K_edgar_data_100_1.txt", "good GOOD bad"),
        (
            "20200102_10-K_edgar_data_200-20_1.txt",
            "Litigation may cause a loss.",
        ),
        ("20200103_10-K_edgar_data_300_1.txt", "may a b c MAY I ."),
        ("20200104_10-K.txt", "good loss litigation"),
        (
            "20200105_10-Q_edgar_data_400_1.txt",
            "Good results must follow the decline, 2019.",
        ),
    ])
}

#[test_log::test]
fn score_mixed_corpus() {
    let fixture = mixed_corpus();
    let summary = Sentiment::new(fixture.config()).run().unwrap();

    assert_eq!(summary.total, 5);
    assert_eq!(summary.valid, 3);
    assert_eq!(summary.skipped.get("no tokens"), Some(&1));
    assert_eq!(summary.skipped.get("malformed filename"), Some(&1));

    let (header, rows) = read_output(&fixture.output());
    assert_eq!(header, OutputRecord::HEADER.to_vec());
    assert_eq!(rows.len(), 3);

    // discovery order, skipped documents absent
    let ciks: Vec<&str> = rows.iter().map(|r| r["CIK"].as_str()).collect();
    assert_eq!(ciks, vec!["0000000100", "0000000200", "0000000400"]);

    // "good GOOD bad"
    let first = &rows[0];
    assert_eq!(first["num_words"], "3");
    assert_eq!(float(first, "pct_positive"), 2.0 / 3.0 * 100.0);
    assert_eq!(float(first, "pct_negative"), 0.0);
    assert_eq!(first["file_size"], "13");
    assert_eq!(float(first, "TF-IDF"), 0.0);

    // LITIGATION CAUSE LOSS, 5 discovered documents
    let second = &rows[1];
    assert_eq!(second["num_words"], "3");
    assert_eq!(float(second, "pct_litigious"), 1.0 / 3.0 * 100.0);
    assert_eq!(float(second, "pct_negative"), 2.0 / 3.0 * 100.0);
    assert_eq!(float(second, "FIN-NEG_pct"), float(second, "pct_negative"));
    assert_eq!(float(second, "H4N-INF_pct"), 1.0 / 3.0 * 100.0);
    let idf = (5.0f64 / (1.0 + DF_SMOOTHING)).ln();
    assert!((float(second, "Term_Weight") - 2.0 / 3.0 * idf).abs() < 1e-9);
    assert!((float(second, "TF-IDF") - 1.0 / 3.0 * idf).abs() < 1e-9);

    // GOOD RESULTS MUST FOLLOW THE DECLINE
    let third = &rows[2];
    assert_eq!(third["num_words"], "6");
    assert_eq!(third["num_numbers"], "1");
    assert_eq!(third["num_digits"], "4");
    assert_eq!(float(third, "pct_modal_strong"), 1.0 / 6.0 * 100.0);
    assert_eq!(float(third, "pct_constraining"), 1.0 / 6.0 * 100.0);
    assert_eq!(float(third, "H4N-INF_pct"), 1.0 / 6.0 * 100.0);
    assert_eq!(third["vocabulary"], "2");
}

#[test]
fn output_properties() {
    let fixture = mixed_corpus();
    Sentiment::new(fixture.config()).run().unwrap();
    let (_, rows) = read_output(&fixture.output());

    for row in &rows {
        for column in OutputRecord::HEADER.iter().filter(|c| c.contains("pct")) {
            let pct = float(row, column);
            assert!((0.0..=100.0).contains(&pct), "{} = {}", column, pct);
        }
        let words: u64 = row["num_words"].parse().unwrap();
        let vocabulary: u64 = row["vocabulary"].parse().unwrap();
        assert!(words > 0);
        assert!(vocabulary <= words);
        assert!(float(row, "TF-IDF") >= 0.0);
        assert!(float(row, "Term_Weight") >= 0.0);
        assert_eq!(row["CIK"].len(), 10);
    }
}

#[test]
fn litigation_in_one_document() {
    let fixture = Fixture::new(&[
        ("20200101_10-K_edgar_data_1_1.txt", "pending litigation risk"),
        ("20200102_10-K_edgar_data_2_1.txt", "operating loss risk"),
    ]);
    let lexicon = fixture.lexicon();
    let column = lexicon.negative_index().column("LITIGATION").unwrap();
    let analyzer = Analyzer::new(lexicon.clone());

    let entries: Vec<CorpusEntry> = CorpusScanner::new(&fixture.pattern())
        .unwrap()
        .scan()
        .unwrap()
        .collect();
    assert_eq!(entries.len(), 2);

    let mut aggregator = CorpusAggregator::new(2, lexicon.negative_index().len(), 2);
    for entry in &entries {
        aggregator.push(analyzer.analyze(entry).unwrap());
    }

    let matrix = aggregator.matrix();
    let df = matrix.document_frequency();
    assert!((df[column] - 1.0 - DF_SMOOTHING).abs() < 1e-12);
    let idf = matrix.inverse_document_frequency(2);
    assert!(idf[column] > 0.0);
    assert!((idf[column] - (2.0f64 / (1.0 + DF_SMOOTHING)).ln()).abs() < 1e-12);

    let tfidf = matrix.tfidf(&idf);
    assert!(tfidf.get(0, column) > 0.0);
    assert_eq!(tfidf.get(1, column), 0.0);
}

#[test]
fn statistics_do_not_depend_on_order() {
    let fixture = mixed_corpus();
    let analyzer = Analyzer::new(fixture.lexicon());
    let entries: Vec<CorpusEntry> = CorpusScanner::new(&fixture.pattern())
        .unwrap()
        .scan()
        .unwrap()
        .collect();

    let reversed: Vec<CorpusEntry> = entries
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, e)| CorpusEntry::new(idx, e.path().to_path_buf()))
        .collect();

    for entry in &entries {
        let other = reversed.iter().find(|e| e.path() == entry.path()).unwrap();
        match (analyzer.analyze(entry), analyzer.analyze(other)) {
            (Ok(a), Ok(b)) => {
                assert_ne!(a.index, b.index);
                assert_eq!(a.text, b.text);
                assert_eq!(a.filer_id, b.filer_id);
            }
            (Err(a), Err(b)) => assert_eq!(a.kind(), b.kind()),
            (a, b) => panic!("diverging results: {:?} / {:?}", a, b),
        }
    }
}

#[test]
fn hidden_files_are_not_discovered() {
    let fixture = Fixture::new(&[(
        "20200101_10-K_edgar_data_100_1.txt",
        "pending litigation risk",
    )]);
    let corpus = fixture.dir.path().join("corpus");
    std::fs::write(
        corpus.join("QTR1").join("._20200101_10-K_edgar_data_100_1.txt"),
        "litigation",
    )
    .unwrap();
    let trash = corpus.join(".Trash");
    std::fs::create_dir(&trash).unwrap();
    std::fs::write(
        trash.join("20200101_10-K_edgar_data_999_1.txt"),
        "operating loss",
    )
    .unwrap();

    let summary = Sentiment::new(fixture.config()).run().unwrap();
    assert_eq!(summary.total, 1);
    assert_eq!(summary.valid, 1);

    let (_, rows) = read_output(&fixture.output());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["CIK"], "0000000100");
    // LITIGATION is in every discovered document
    assert_eq!(float(&rows[0], "TF-IDF"), 0.0);
}

#[test]
fn empty_corpus_writes_header() {
    let fixture = Fixture::new(&[("20200103_10-K_edgar_data_300_1.txt", "may a b c")]);
    let summary = Sentiment::new(fixture.config()).run().unwrap();
    assert_eq!(summary.total, 1);
    assert_eq!(summary.valid, 0);

    let (header, rows) = read_output(&fixture.output());
    assert_eq!(header.len(), 22);
    assert!(rows.is_empty());
}

#[test]
fn no_matching_files() {
    let fixture = Fixture::new(&[]);
    let summary = Sentiment::new(fixture.config()).run().unwrap();
    assert_eq!(summary.total, 0);
    assert!(fixture.output().exists());
}

#[test]
fn missing_lexicon_is_fatal() {
    let fixture = mixed_corpus();
    let mut config = fixture.config();
    config.lexicon_path = fixture.dir.path().join("missing.csv");

    let res = Sentiment::new(config).run();
    assert!(matches!(res, Err(Error::Io(_))));
    assert!(!fixture.output().exists());
}

#[test]
fn invalid_pattern_is_fatal() {
    let fixture = mixed_corpus();
    let mut config = fixture.config();
    config.corpus_pattern = format!("{}/[corpus", fixture.dir.path().display());

    assert!(matches!(
        Sentiment::new(config).run(),
        Err(Error::GlobPattern(_))
    ));
}
