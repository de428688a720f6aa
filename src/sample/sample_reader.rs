use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::feature_struct::Feature;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a delimiter-separated text file
/// of integer category codes to [`Sample`].
/// One column holds the class label;
/// by default it is the first column,
/// matching the common `label, attr, attr, ...` row layout.
///
/// # Example
/// The following code reads a comma-separated file.
/// ```no_run
/// use minitrees::SampleReader;
///
/// let filename = "/path/to/data/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .delimiter(',')
///     .target_column(0)
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    delimiter: char,
    target_column: usize,
}


impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            delimiter: ',',
            target_column: 0,
        }
    }


    /// Set the cell delimiter.
    /// Default is `','.`
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }


    /// Set the column index that is used for the target label.
    /// Default is `0.`
    pub fn target_column(mut self, column: usize) -> Self {
        self.target_column = column;
        self
    }
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `std::io::Result<Sample>`.
    /// This method consumes `self.`
    ///
    /// Every cell must parse as an integer;
    /// a non-integer cell or a ragged row yields
    /// an error of kind [`io::ErrorKind::InvalidData`].
    pub fn read(self) -> io::Result<Sample> {
        if self.file.is_none() {
            panic!("The file name is not set. Use `SampleReader::file`.");
        }
        let file = File::open(self.file.unwrap())?;
        let lines = BufReader::new(file).lines();

        let mut columns: Vec<Vec<i64>> = Vec::new();

        // For each line of the file
        for line in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let row = line.split(self.delimiter)
                .map(|cell| cell.trim().parse::<i64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("failed to parse the line `{line}`: {e}"),
                ))?;

            if columns.is_empty() {
                columns = vec![Vec::new(); row.len()];
            }
            if row.len() != columns.len() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "expected {} cells per row, got {}",
                        columns.len(),
                        row.len(),
                    ),
                ));
            }

            for (column, x) in columns.iter_mut().zip(row) {
                column.push(x);
            }
        }

        if self.target_column >= columns.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "the target column {} does not exist; \
                     the file has {} columns",
                    self.target_column,
                    columns.len(),
                ),
            ));
        }
        let target = columns.remove(self.target_column);

        let features = columns.into_iter()
            .enumerate()
            .map(|(j, values)| Feature::from_values(format!("x{j}"), values))
            .collect::<Vec<_>>();

        Ok(Sample::from_columns(features, target))
    }
}
