//! # lexisent
//!
//! Computes lexicon sentiment statistics and TF-IDF weights over a corpus of text files.
//!
//! ```sh
//! lexisent 0.1.0
//! lexicon sentiment statistics for text corpora.
//!
//! USAGE:
//!     lexisent <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help     Prints this message or the help of the given subcommand(s)
//!     score    Score a corpus and compute TF-IDF weights
//! ```
//!
//! Logging is configured through `RUST_LOG` (ex. `RUST_LOG=info`).
use lexisent::error::Error;
use lexisent::pipelines::{Pipeline, Sentiment};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Lexisent::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Lexisent::Score(s) => {
            info!("lexisent {}", Sentiment::version());
            let p = Sentiment::new(s.into());
            let summary = p.run()?;
            info!(
                "done: {} valid documents out of {}",
                summary.valid, summary.total
            );
        }
    };
    Ok(())
}
