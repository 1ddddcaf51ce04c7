//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait, implemented by the
//! [Sentiment] scoring pipeline.
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod sentiment;

pub use pipeline::Pipeline;
pub use sentiment::{RunSummary, ScoreConfig, Sentiment};
