use std::path::Path;

use super::table::Table;
use crate::errors::C45Error;


/// A struct that returns [`Table`].
/// Using this struct, one can read a whitespace-delimited file to [`Table`].
/// # Example
/// ```no_run
/// use c45::TableReader;
/// let filename = "/path/to/data.txt";
/// let table = TableReader::default()
///     .file(filename)
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct TableReader<P> {
    file: Option<P>,
    has_header: bool,
}


impl<P> Default for TableReader<P> {
    fn default() -> Self {
        Self { file: None, has_header: false, }
    }
}


impl<P> TableReader<P> {
    /// Construct a new instance of [`TableReader`].
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P> TableReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Table, C45Error> {
        let file = self.file.ok_or(C45Error::FileNotSet)?;
        let table = Table::from_file(file.as_ref(), self.has_header)?;

        log::debug!(
            "read {} rows x {} columns from {}",
            table.shape().0,
            table.shape().1,
            file.as_ref().display(),
        );
        Ok(table)
    }
}
