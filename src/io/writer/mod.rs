/*!
# Output table writing

Rows are written to a temporary sibling of the destination file, which is renamed
over the destination on [WriterTrait::commit]. A run that fails before committing
leaves any previous output untouched.
!*/
mod csvwriter;
mod writertrait;

pub use csvwriter::CsvWriter;
pub use writertrait::WriterTrait;
