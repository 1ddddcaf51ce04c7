//! CSV table writer.
use std::{
    ffi::OsString,
    fs::File,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use serde::Serialize;

use super::WriterTrait;
use crate::error::Error;

/// Writes serializable rows to a CSV file, atomically.
///
/// Rows go to a temporary sibling of the destination, renamed on [WriterTrait::commit].
/// A writer dropped without a successful commit removes its temporary file.
pub struct CsvWriter<T> {
    handle: csv::Writer<File>,
    tmp: PathBuf,
    dst: PathBuf,
    nb_rows: usize,
    committed: bool,
    _item: PhantomData<T>,
}

/// `out.csv` -> `out.csv.tmp`, in the same directory so that renaming stays on one filesystem.
fn tmp_path(dst: &Path) -> PathBuf {
    let mut name = dst
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    dst.with_file_name(name)
}

impl<T: Serialize> WriterTrait for CsvWriter<T> {
    type Item = T;

    fn new(dst: &Path, header: &[&str]) -> Result<Self, Error> {
        let tmp = tmp_path(dst);
        debug!("writing table to temporary file {:?}", tmp);
        let handle = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp)?;

        let mut writer = Self {
            handle,
            tmp,
            dst: dst.to_path_buf(),
            nb_rows: 0,
            committed: false,
            _item: PhantomData,
        };
        writer.handle.write_record(header)?;
        Ok(writer)
    }

    fn write(&mut self, vals: Vec<T>) -> Result<(), Error> {
        for val in &vals {
            self.write_single(val)?;
        }
        Ok(())
    }

    fn write_single(&mut self, val: &T) -> Result<(), Error> {
        self.handle.serialize(val)?;
        self.nb_rows += 1;
        Ok(())
    }

    fn commit(mut self) -> Result<(), Error> {
        self.handle.flush()?;
        std::fs::rename(&self.tmp, &self.dst)?;
        self.committed = true;
        info!("wrote {} rows to {:?}", self.nb_rows, self.dst);
        Ok(())
    }
}

impl<T> Drop for CsvWriter<T> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        debug!("removing uncommitted table {:?}", self.tmp);
        if let Err(e) = std::fs::remove_file(&self.tmp) {
            warn!("could not remove {:?}: {}", self.tmp, e);
        }
    }
}
