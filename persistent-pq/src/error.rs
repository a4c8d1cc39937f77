//! Error types.

use std::error::Error as StdError;
use std::fmt;

/// Error returned by fallible queue construction and removal operations.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The textual bucket variant is neither `queue` nor `set`.
    ///
    /// The offending tag is carried verbatim.
    InvalidVariant(String),
    /// An element was requested to be removed from an empty queue.
    EmptyQueue,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVariant(value) => write!(
                fmt,
                "invalid bucket variant `{}`: expected `queue` or `set`",
                value
            ),
            Self::EmptyQueue => write!(fmt, "cannot remove an element from an empty queue"),
        }
    }
}

impl StdError for Error {}
