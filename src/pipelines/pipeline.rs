//! Pipeline trait.
use crate::error::Error;

/// Implemented by each pipeline.
/// Generic over the return type so that pipelines can report
/// what they did to their caller.
pub trait Pipeline<T> {
    fn version() -> &'static str;
    fn run(&self) -> Result<T, Error>;
}
