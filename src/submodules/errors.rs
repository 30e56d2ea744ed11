use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a plotting run.
///
/// None of these are recovered from: the sweep returns the first one it
/// hits and `main` reports it.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Input file missing or unreadable.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader gave up on the file, e.g. invalid UTF-8.
    #[error("cannot parse {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A field that does not parse as a real number.
    #[error("{}:{line}: `{token}` is not a number", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    /// A data row without exactly two fields.
    #[error("{}:{line}: expected 2 columns, found {found}", .path.display())]
    ColumnCount {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    #[error("table shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Bad or unreadable parameter file.
    #[error("configuration error: {0}")]
    Config(String),

    /// Backend failure while drawing or writing a figure.
    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
