//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use lexisent::pipelines::ScoreConfig;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "lexisent", about = "lexicon sentiment statistics for text corpora.")]
/// Holds every command that is callable by the `lexisent` command.
pub enum Lexisent {
    #[structopt(about = "Score a corpus and compute TF-IDF weights")]
    Score(Score),
}

#[derive(Debug, StructOpt)]
/// Score command and parameters.
///
/// ```sh
/// lexisent-score 0.1.0
/// Score a corpus and compute TF-IDF weights
///
/// USAGE:
///     lexisent score [OPTIONS] <corpus-pattern> <lexicon-path> <neg-wordlist-path> <output-path>
///
/// OPTIONS:
///     -t, --threads <threads>    number of workers. Default is the number of cpus minus one.
///
/// ARGS:
///     <corpus-pattern>       glob pattern of corpus files (ex. "data/**/*.txt")
///     <lexicon-path>         path to the master dictionary (csv)
///     <neg-wordlist-path>    path to the negative word list (one word per line)
///     <output-path>          output table destination (csv)
/// ```
pub struct Score {
    #[structopt(help = "glob pattern of corpus files (ex. \"data/**/*.txt\")")]
    pub corpus_pattern: String,
    #[structopt(parse(from_os_str), help = "path to the master dictionary (csv)")]
    pub lexicon_path: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "path to the negative word list (one word per line)"
    )]
    pub neg_wordlist_path: PathBuf,
    #[structopt(parse(from_os_str), help = "output table destination (csv)")]
    pub output_path: PathBuf,
    #[structopt(
        short = "t",
        long = "threads",
        help = "number of workers. Default is the number of cpus minus one."
    )]
    pub threads: Option<usize>,
}

impl From<Score> for ScoreConfig {
    fn from(s: Score) -> Self {
        let config = ScoreConfig::new(
            s.corpus_pattern,
            s.lexicon_path,
            s.neg_wordlist_path,
            s.output_path,
        );
        match s.threads {
            Some(n) => config.with_threads(n),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_score() {
        let opt = Lexisent::from_iter_safe(vec![
            "lexisent",
            "score",
            "-t",
            "2",
            "data/**/*.txt",
            "dict.csv",
            "neg.txt",
            "out.csv",
        ])
        .unwrap();

        let Lexisent::Score(s) = opt;
        let config = ScoreConfig::from(s);
        assert_eq!(config.corpus_pattern, "data/**/*.txt");
        assert_eq!(config.lexicon_path, PathBuf::from("dict.csv"));
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
        assert_eq!(config.threads, Some(2));
    }

    #[test]
    fn missing_argument() {
        assert!(Lexisent::from_iter_safe(vec!["lexisent", "score", "data/*.txt"]).is_err());
    }
}
