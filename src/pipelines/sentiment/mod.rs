//! Lexicon sentiment scoring pipeline.
mod config;
mod pipeline;

pub use config::ScoreConfig;
pub use pipeline::{RunSummary, Sentiment};
