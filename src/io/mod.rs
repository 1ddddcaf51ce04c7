/*!
# IO utilities

Writing of the output table.
!*/
pub mod writer;

pub use writer::{CsvWriter, WriterTrait};
