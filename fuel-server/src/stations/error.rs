//! Station catalog error types.

/// Errors that can occur while loading the station price list.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// File could not be read
    #[error("failed to read station file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV structure could not be parsed with any known delimiter
    #[error("station file is not a readable delimited table")]
    Unparseable,

    /// A required column is missing from the header
    #[error("station file has no recognizable {which} column")]
    MissingColumn { which: &'static str },

    /// The file parsed but contained no usable rows
    #[error("no valid station rows found in the file")]
    Empty,
}
