//! Errors
//!
//! The error type shared by the table reader and the tree builder.
use thiserror::Error;

/// Errors that can occur while reading a table or inducing a tree.
#[derive(Debug, Error)]
pub enum C45Error {
    /// The table has no data rows.
    #[error("The table has no data rows.")]
    EmptyTable,
    /// The table needs at least one attribute column and the label column.
    #[error("The table has {0} column(s), but at least 2 are required (attributes + class label).")]
    TooFewColumns(usize),
    /// A row whose length differs from the first row.
    #[error("Row {row} has {found} token(s), expected {expected}.")]
    RaggedRow {
        /// 1-based position of the offending row.
        /// `Table::from_reader` and `Table::from_file` report the line
        /// number in the input, blank and header lines included.
        /// `Table::new` and `Table::with_names` report the index
        /// among the given data rows.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// The header names a different number of columns than the rows have.
    #[error("The header has {found} column name(s), but the rows have {expected} column(s).")]
    HeaderMismatch {
        /// Width of the data rows.
        expected: usize,
        /// Width of the header line.
        found: usize,
    },
    /// A node without rows has no representative row.
    #[error("The node covers no rows.")]
    EmptySample,
    /// Cell access outside of the table.
    #[error("Cell ({row}, {column}) is out of range.")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
    /// `TableReader::read` was called before a file was given.
    #[error("The file name for the table is not set.")]
    FileNotSet,
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Unable to serialize the tree.
    #[error("Unable to write tree: {0}")]
    UnableToWrite(String),
}
