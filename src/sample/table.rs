use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::ops::Index;

use crate::constants::{ATTRIBUTE_PREFIX, LABEL_COLUMN_NAME};
use crate::errors::C45Error;


/// Struct `Table` holds the training examples as string tokens.
/// Each row is one example, the last column is the class label
/// and every other column is a (discrete) attribute.
///
/// A `Table` is validated on construction:
/// it has at least one row, at least two columns,
/// and every row has the same width.
/// It never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    names: Vec<String>,
    rows: Vec<Vec<String>>,
    n_column: usize,
}


impl Table {
    /// Construct a new `Table` from the rows.
    /// The columns are named `A0, A1, ...` and the label column `class`.
    /// A ragged row is reported by its 1-based index in `rows`.
    pub fn new<R, S>(rows: R) -> Result<Self, C45Error>
        where R: IntoIterator,
              R::Item: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let rows = rows.into_iter()
            .map(|row| row.into_iter().map(Into::into).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let n_column = validate(&rows)?;
        let names = default_names(n_column);

        Ok(Self { names, rows, n_column, })
    }


    /// Construct a new `Table` with the given column names.
    pub fn with_names<N, R, S>(names: N, rows: R) -> Result<Self, C45Error>
        where N: IntoIterator<Item = S>,
              R: IntoIterator,
              R::Item: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let names = names.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        let mut table = Self::new(rows)?;
        if names.len() != table.n_column {
            return Err(C45Error::HeaderMismatch {
                expected: table.n_column,
                found: names.len(),
            });
        }
        table.names = names;
        Ok(table)
    }


    /// Read whitespace-delimited tokens from `reader`.
    /// Blank lines are ignored.
    /// If `has_header` is `true`, the first non-blank line names the columns.
    /// A ragged row is reported by its 1-based line number in `reader`.
    pub fn from_reader<R>(reader: R, has_header: bool)
        -> Result<Self, C45Error>
        where R: BufRead,
    {
        let mut header: Option<Vec<String>> = None;
        let mut rows = Vec::new();
        let mut expected: Option<usize> = None;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let tokens = line.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>();
            if tokens.is_empty() { continue; }

            if has_header && header.is_none() {
                header = Some(tokens);
                continue;
            }

            // Report the line number so that the caller can fix the file.
            match expected {
                None => { expected = Some(tokens.len()); },
                Some(width) if width != tokens.len() => {
                    return Err(C45Error::RaggedRow {
                        row: i + 1,
                        expected: width,
                        found: tokens.len(),
                    });
                },
                Some(_) => {},
            }
            rows.push(tokens);
        }

        match header {
            Some(names) => Self::with_names(names, rows),
            None => Self::new(rows),
        }
    }


    /// Read a whitespace-delimited file.
    pub fn from_file<P>(file: P, has_header: bool) -> Result<Self, C45Error>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        Self::from_reader(BufReader::new(file), has_header)
    }


    /// Returns the pair of the number of rows and columns.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.n_column)
    }


    /// Returns the number of attribute columns.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.n_column - 1
    }


    /// Returns the index of the label column.
    #[inline]
    pub fn label_column(&self) -> usize {
        self.n_column - 1
    }


    /// Returns the column names.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names[..]
    }


    /// Returns the name of the given column.
    pub fn name(&self, column: usize) -> Option<&str> {
        self.names.get(column).map(String::as_str)
    }


    /// Returns the token at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Result<&str, C45Error> {
        self.rows.get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .ok_or(C45Error::OutOfRange { row, column })
    }


    /// Returns the whole record at `row`.
    pub fn record(&self, row: usize) -> Result<&[String], C45Error> {
        self.rows.get(row)
            .map(|r| &r[..])
            .ok_or(C45Error::OutOfRange { row, column: 0 })
    }


    /// Returns the class label of `row`.
    pub fn label(&self, row: usize) -> Result<&str, C45Error> {
        self.cell(row, self.label_column())
    }


    /// Token lookup used by the induction.
    /// The callers only pass indices that come from this table.
    #[inline]
    pub(crate) fn token(&self, row: usize, column: usize) -> &str {
        &self.rows[row][column]
    }


    /// Class label lookup used by the induction.
    #[inline]
    pub(crate) fn target(&self, row: usize) -> &str {
        self.token(row, self.n_column - 1)
    }
}


impl Index<(usize, usize)> for Table {
    type Output = str;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        self.token(row, column)
    }
}


/// Check the shape of `rows` and return the number of columns.
fn validate(rows: &[Vec<String>]) -> Result<usize, C45Error> {
    let first = rows.first().ok_or(C45Error::EmptyTable)?;
    let n_column = first.len();

    if let Some((i, row)) = rows.iter()
        .enumerate()
        .find(|(_, row)| row.len() != n_column)
    {
        return Err(C45Error::RaggedRow {
            row: i + 1,
            expected: n_column,
            found: row.len(),
        });
    }

    if n_column < 2 {
        return Err(C45Error::TooFewColumns(n_column));
    }
    Ok(n_column)
}


fn default_names(n_column: usize) -> Vec<String> {
    let mut names = (0..n_column - 1)
        .map(|i| format!("{ATTRIBUTE_PREFIX}{i}"))
        .collect::<Vec<_>>();
    names.push(LABEL_COLUMN_NAME.to_string());
    names
}
