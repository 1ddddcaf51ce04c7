use std::path::Path;

use crate::error::Error;

pub trait WriterTrait {
    type Item;

    /// Open a writer for `dst`, writing `header` first.
    fn new(dst: &Path, header: &[&str]) -> Result<Self, Error>
    where
        Self: Sized;
    fn write(&mut self, vals: Vec<Self::Item>) -> Result<(), Error>;
    fn write_single(&mut self, val: &Self::Item) -> Result<(), Error>;
    /// Flush and move the written table to its destination.
    fn commit(self) -> Result<(), Error>;
}
