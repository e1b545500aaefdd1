use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unable to read the tag table: {0}")]
    Io(#[from] std::io::Error),
    #[error("The tag table is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("Line {line}: expected at least two columns")]
    MissingCount { line: usize },
    #[error("Line {line}: invalid count {value:?}")]
    InvalidCount { line: usize, value: String },
    #[error("Line {line}: count {value:?} is out of range")]
    CountOutOfRange {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
