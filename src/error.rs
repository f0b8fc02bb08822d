use alloc::string::String;

use displaydoc::Display;

/// The two classes of failure a user gets to see.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum ErrorKind {
    /// The method is not applicable!
    NotApplicable,
    /// The problem is not balanced!
    Unbalanced,
}

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Error {
    /// Invalid problem without any source
    EmptySupply,
    /// Invalid problem without any sink
    EmptyDemand,
    /// Invalid supply for source {0}, expected non-negative value
    NegativeSupply(usize),
    /// Invalid demand for sink {0}, expected non-negative value
    NegativeDemand(usize),
    /// Invalid unit cost at ({0}, {1}), expected non-negative value
    NegativeCost(usize, usize),
    /// Invalid cost matrix shape {rows}x{cols}, expected {expected_rows}x{expected_cols}
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
    /// Total supply {supply} differs from total demand {demand}
    Unbalanced { supply: String, demand: String },
}

impl core::error::Error for Error {}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unbalanced { .. } => ErrorKind::Unbalanced,
            _ => ErrorKind::NotApplicable,
        }
    }
}
